bitflags::bitflags! {
    /// Digital output codes, one bit per button in the host report.
    ///
    /// The host clears its report every cycle, so the engine re-emits the
    /// codes of all held sensors on each poll.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    pub struct Buttons: u16 {
        const B1 = 0x0001;
        const B2 = 0x0002;
        const B3 = 0x0004;
        const B4 = 0x0008;
        const L1 = 0x0010;
        const R1 = 0x0020;
        const L2 = 0x0040;
        const R2 = 0x0080;
        const S1 = 0x0100;
        const S2 = 0x0200;
        const L3 = 0x0400;
        const R3 = 0x0800;
        const A1 = 0x1000;
        const A2 = 0x2000;
    }
}
