use ts::TsPacket;
use Result;

/// TS packet reader over an in-memory buffer.
///
/// The buffer is split into fixed size chunks of `leading_bytes + 188` bytes,
/// and the last 188 bytes of each chunk are decoded as a packet.
/// A trailing fragment shorter than a chunk is ignored.
#[derive(Debug, Clone)]
pub struct TsPacketReader<'a> {
    buf: &'a [u8],
    position: usize,
    leading_bytes: usize,
    peeked_packet: Option<Result<TsPacket<'a>>>,
}
impl<'a> TsPacketReader<'a> {
    /// Makes a new `TsPacketReader` instance.
    pub fn new(buf: &'a [u8]) -> Self {
        TsPacketReader {
            buf,
            position: 0,
            leading_bytes: 0,
            peeked_packet: None,
        }
    }

    /// Sets the number of bytes preceding each packet.
    ///
    /// For example, `4` for the 192-byte packets of M2TS files, whose
    /// packets are prefixed with a timecode.
    pub fn with_leading_bytes(mut self, n: usize) -> Self {
        self.leading_bytes = n;
        self
    }

    /// Returns the size of a chunk (leading bytes plus packet).
    pub fn chunk_size(&self) -> usize {
        self.leading_bytes + TsPacket::SIZE
    }

    /// Returns the byte offset of the next unread chunk in the buffer.
    ///
    /// A peeked but not yet read packet counts as unread.
    pub fn position(&self) -> usize {
        if self.peeked_packet.is_some() {
            self.position - self.chunk_size()
        } else {
            self.position
        }
    }

    /// Reads a TS packet.
    ///
    /// If the end of the buffer is reached, it will return `Ok(None)`.
    pub fn read_ts_packet(&mut self) -> Result<Option<TsPacket<'a>>> {
        if let Some(peeked) = self.peeked_packet.take() {
            return peeked.map(Some);
        }
        match self.read_next_packet() {
            None => Ok(None),
            Some(result) => result.map(Some),
        }
    }

    /// Peeks at next packet without consuming it.
    pub fn peek_ts_packet(&mut self) -> Option<&TsPacket<'a>> {
        if self.peeked_packet.is_none() {
            self.peeked_packet = self.read_next_packet();
        }
        match self.peeked_packet {
            Some(Ok(ref packet)) => Some(packet),
            _ => None,
        }
    }

    /// Reads the next packet that decodes successfully.
    ///
    /// Malformed packets are skipped.
    pub fn next_valid_packet(&mut self) -> Option<TsPacket<'a>> {
        loop {
            let position = TsPacketReader::position(self);
            match self.read_ts_packet() {
                Ok(packet) => return packet,
                Err(e) => {
                    log::trace!("Dropped packet: position={}, error={}", position, e);
                }
            }
        }
    }

    fn read_next_packet(&mut self) -> Option<Result<TsPacket<'a>>> {
        let buf: &'a [u8] = self.buf;
        let rest = &buf[self.position..];
        if rest.len() < self.chunk_size() {
            if !rest.is_empty() {
                log::debug!(
                    "Ignored {} trailing bytes at position {}",
                    rest.len(),
                    self.position
                );
                self.position = buf.len();
            }
            return None;
        }

        let chunk = &rest[self.leading_bytes..self.chunk_size()];
        self.position += self.chunk_size();
        Some(track!(TsPacket::read_from(chunk)))
    }
}
impl<'a> Iterator for TsPacketReader<'a> {
    type Item = Result<TsPacket<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_ts_packet().transpose()
    }
}
