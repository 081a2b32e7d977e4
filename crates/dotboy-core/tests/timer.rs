use dotboy_core::timer::Timer;

#[test]
fn div_counts_every_256_cycles() {
    let mut t = Timer::new();
    let mut if_reg = 0u8;
    t.div = 0;
    t.step(255, &mut if_reg);
    assert_eq!(t.read(0xFF04), 0);
    t.step(1, &mut if_reg);
    assert_eq!(t.read(0xFF04), 1);
    assert_eq!(if_reg, 0);
}

#[test]
fn any_div_write_resets_counter() {
    let mut t = Timer::new();
    t.div = 0xABCD;
    t.write(0xFF04, 0xFF);
    assert_eq!(t.read(0xFF04), 0);
    assert_eq!(t.div, 0);
}

#[test]
fn tima_disabled_does_not_count() {
    let mut t = Timer::new();
    let mut if_reg = 0u8;
    t.write(0xFF07, 0x01); // freq set but enable clear
    t.step(4096, &mut if_reg);
    assert_eq!(t.read(0xFF05), 0);
}

#[test]
fn tima_counts_at_selected_frequency() {
    let mut t = Timer::new();
    let mut if_reg = 0u8;
    t.write(0xFF07, 0x06); // enabled, 65536 Hz: one tick per 64 cycles
    t.step(64 * 3, &mut if_reg);
    assert_eq!(t.read(0xFF05), 3);
    assert_eq!(if_reg, 0);
}

#[test]
fn tima_overflow_reloads_tma_and_interrupts() {
    let mut t = Timer::new();
    let mut if_reg = 0u8;
    t.write(0xFF06, 0xF0);
    t.write(0xFF05, 0xFE);
    t.write(0xFF07, 0x05); // enabled, 262144 Hz: one tick per 16 cycles

    t.step(16, &mut if_reg);
    assert_eq!(t.read(0xFF05), 0xFF);
    assert_eq!(if_reg, 0);

    t.step(16, &mut if_reg);
    assert_eq!(t.read(0xFF05), 0xF0);
    assert_eq!(if_reg & 0x04, 0x04);
}

#[test]
fn tac_reads_back_with_high_bits_set() {
    let mut t = Timer::new();
    t.write(0xFF07, 0x05);
    assert_eq!(t.read(0xFF07), 0xFD);
}

#[test]
fn slowest_rate_is_1024_cycles() {
    let mut t = Timer::new();
    let mut if_reg = 0u8;
    t.write(0xFF07, 0x04);
    t.step(1023, &mut if_reg);
    assert_eq!(t.read(0xFF05), 0);
    t.step(1, &mut if_reg);
    assert_eq!(t.read(0xFF05), 1);
}
