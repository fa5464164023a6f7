use {ErrorKind, Result};

/// Packet identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pid(u16);
impl Pid {
    /// Maximum value of the identifier.
    pub const MAX: u16 = (1 << 13) - 1;

    /// Program association table.
    pub const PAT: u16 = 0x0000;

    /// Conditional access table.
    pub const CAT: u16 = 0x0001;

    /// Null packets.
    pub const NULL: u16 = 0x1FFF;

    /// Makes a new `Pid` instance.
    ///
    /// # Errors
    ///
    /// If `pid` is greater than `Pid::MAX`, it will return an `ErrorKind::InvalidInput` error.
    pub fn new(pid: u16) -> Result<Self> {
        track_assert!(pid <= Self::MAX, ErrorKind::InvalidInput, "Too large PID: {}", pid);
        Ok(Pid(pid))
    }

    /// Returns the value of the identifier.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Returns `true` if this identifies null (stuffing) packets.
    pub fn is_null(&self) -> bool {
        self.0 == Self::NULL
    }

    pub(super) fn from_header_bytes(b1: u8, b2: u8) -> Self {
        Pid((u16::from(b1 & 0x1F) << 8) | u16::from(b2))
    }
}
impl From<Pid> for u16 {
    fn from(f: Pid) -> Self {
        f.as_u16()
    }
}
