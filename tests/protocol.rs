mod common;

use common::SimulatedChip;
use embassy_futures::block_on;
use tle75008_esd::{Channel, Error, InputPin, Reg, Tle75008};

#[test]
fn set_channel_sets_one_bit() {
    for initial in [0x00u8, 0x5A, 0xFF, 0x81] {
        for channel in 0..8u8 {
            let mut sim = SimulatedChip::new();
            sim.set_reg(Reg::OUT, initial);
            let outputs = block_on(async {
                let mut chip = Tle75008::new(&mut sim);
                chip.set_channel(channel, true).await.unwrap();
                chip.read_outputs().await.unwrap()
            });
            assert_eq!(outputs, initial | (1 << channel));
        }
    }
}

#[test]
fn clear_channel_clears_one_bit() {
    for initial in [0x00u8, 0x5A, 0xFF, 0x81] {
        for channel in 0..8u8 {
            let mut sim = SimulatedChip::new();
            sim.set_reg(Reg::OUT, initial);
            block_on(Tle75008::new(&mut sim).set_channel(channel, false)).unwrap();
            assert_eq!(sim.reg(Reg::OUT), initial & !(1 << channel));
        }
    }
}

#[test]
fn out_of_range_channel_is_a_no_op() {
    let mut sim = SimulatedChip::new();
    sim.set_reg(Reg::OUT, 0x21);
    block_on(async {
        let mut chip = Tle75008::new(&mut sim);
        chip.set_channel(8, true).await.unwrap();
        assert_eq!(chip.try_set_channel(8, true).await, Err(Error::InvalidChannel(8)));
    });
    assert_eq!(sim.reg(Reg::OUT), 0x21);
    assert!(sim.frames().is_empty());
}

#[test]
fn one_based_outputs() {
    let mut sim = SimulatedChip::new();
    block_on(async {
        let mut chip = Tle75008::new(&mut sim);
        chip.toggle_output(1, true).await.unwrap();
        chip.toggle_output(8, true).await.unwrap();
        chip.toggle_output(9, true).await.unwrap();
    });
    assert_eq!(sim.reg(Reg::OUT), 0x81);

    block_on(Tle75008::new(&mut sim).toggle_output(8, false)).unwrap();
    assert_eq!(sim.reg(Reg::OUT), 0x01);
}

#[test]
fn write_then_read_round_trips() {
    let mut sim = SimulatedChip::new();
    block_on(async {
        let mut chip = Tle75008::new(&mut sim);
        for address in 0..64u8 {
            if address == Reg::HWCR_OCL.addr() {
                continue;
            }
            let value = address.wrapping_mul(37) ^ 0xA5;
            chip.write_address(address, value).await.unwrap();
            assert_eq!(chip.read_address(address).await.unwrap(), value);
        }
    });
}

#[test]
fn frame_counts() {
    let mut sim = SimulatedChip::new();
    block_on(Tle75008::new(&mut sim).write_register(Reg::DIAG_IOL, 0x0F)).unwrap();
    assert_eq!(sim.frames(), vec![0x880F, 0x0000]);

    sim.clear_events();
    block_on(Tle75008::new(&mut sim).read_register(Reg::DIAG_IOL)).unwrap();
    assert_eq!(sim.frames(), vec![0x4802, 0x0000, 0x0000]);
}

#[test]
fn write_outputs_scenario() {
    let mut sim = SimulatedChip::new();
    let outputs = block_on(async {
        let mut chip = Tle75008::new(&mut sim);
        chip.write_outputs(0x05).await.unwrap();
        chip.read_outputs().await.unwrap()
    });
    assert_eq!(outputs, 0x05);
    assert_eq!(&sim.frames()[..2], &[0x8005, 0x0000]);
}

#[test]
fn stale_diagnosis_does_not_leak_into_reads() {
    let mut sim = SimulatedChip::new();
    sim.latched_errors = 0x7E;
    sim.set_reg(Reg::INST, 0x03);
    let status = block_on(async {
        let mut chip = Tle75008::new(&mut sim);
        chip.write_outputs(0x00).await.unwrap();
        chip.read_input_status().await.unwrap()
    });
    assert_eq!(status, 0x03);
}

#[test]
fn clear_all_errors_writes_ff() {
    let mut sim = SimulatedChip::new();
    sim.latched_errors = 0xA5;
    block_on(Tle75008::new(&mut sim).clear_all_errors()).unwrap();
    assert_eq!(sim.latched_errors, 0x00);
    assert_eq!(sim.frames(), vec![0x8DFF, 0x0000]);
}

#[test]
fn clear_error_releases_one_latch() {
    let mut sim = SimulatedChip::new();
    sim.latched_errors = 0xFF;
    block_on(async {
        let mut chip = Tle75008::new(&mut sim);
        chip.clear_error(3).await.unwrap();
        chip.clear_error(8).await.unwrap();
    });
    assert_eq!(sim.latched_errors, 0xF7);
}

#[test]
fn diagnostic_current_is_replaced_not_merged() {
    let mut sim = SimulatedChip::new();
    sim.set_reg(Reg::DIAG_IOL, 0xF0);
    let mask = block_on(async {
        let mut chip = Tle75008::new(&mut sim);
        chip.write_diagnostic_current(0x0C).await.unwrap();
        chip.read_diagnostic_current().await.unwrap()
    });
    assert_eq!(mask, 0x0C);
    // write only, no read-modify-write
    assert_eq!(&sim.frames()[..2], &[0x880C, 0x0000]);
}

#[test]
fn diagnostic_registers() {
    let mut sim = SimulatedChip::new();
    sim.set_reg(Reg::DIAG_OSM, 0x42);
    sim.set_reg(Reg::INST, 0x02);
    block_on(async {
        let mut chip = Tle75008::new(&mut sim);
        assert_eq!(chip.read_output_status_monitor().await.unwrap(), 0x42);
        assert_eq!(chip.read_input_status().await.unwrap(), 0x02);
    });
}

#[test]
fn input_mapping() {
    let mut sim = SimulatedChip::new();
    block_on(async {
        let mut chip = Tle75008::new(&mut sim);
        chip.write_input_mapping(InputPin::In0, 0x10).await.unwrap();
        assert_eq!(chip.read_input_mapping(InputPin::In0).await.unwrap(), 0x10);
    });
    assert_eq!(sim.reg(Reg::MAPIN0), 0x10);
}

#[test]
fn pipelined_reader() {
    let mut sim = SimulatedChip::new();
    sim.set_reg(Reg::OUT, 0x11);
    sim.set_reg(Reg::DIAG_IOL, 0x22);
    sim.set_reg(Reg::HWCR, 0x83);

    let (mut out, mut iol, mut hwcr) = (0u8, 0u8, 0u8);
    block_on(async {
        let mut chip = Tle75008::new(&mut sim);
        chip.reader()
            .read(Reg::OUT, &mut out)
            .await
            .unwrap()
            .read(Reg::DIAG_IOL, &mut iol)
            .await
            .unwrap()
            .read(Reg::HWCR, &mut hwcr)
            .await
            .unwrap()
            .end()
            .await
            .unwrap();
    });
    assert_eq!((out, iol, hwcr), (0x11, 0x22, 0x83));
    assert_eq!(sim.frames(), vec![0x4002, 0x4802, 0x4C02, 0x0000, 0x0000]);
}

#[test]
fn empty_reader_sends_nothing() {
    let mut sim = SimulatedChip::new();
    block_on(async {
        let mut chip = Tle75008::new(&mut sim);
        chip.reader().end().await.unwrap();
    });
    assert!(sim.frames().is_empty());
}

#[test]
fn every_channel_through_the_typed_api() {
    let mut sim = SimulatedChip::new();
    block_on(async {
        let mut chip = Tle75008::new(&mut sim);
        for channel in Channel::all() {
            chip.set_channel(channel.index(), true).await.unwrap();
        }
    });
    assert_eq!(sim.reg(Reg::OUT), 0xFF);
}
