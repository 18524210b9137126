/// Streaming-side transport carrying PCM samples to the codec.
///
/// The CS43L22 receives audio over a serial audio bus (I²S) that is separate
/// from the I²C control port. The host owns that peripheral and its DMA; the
/// driver only needs to start and stop it in lockstep with codec power
/// transitions. Implement this for whatever I²S/DMA handle the platform
/// provides.
pub trait AudioStream {
    /// Error type for stream operations.
    type Error;

    /// Begin transmission of a caller-supplied sample buffer.
    fn start(&mut self, buffer: &[u16]) -> Result<(), Self::Error>;

    /// Suspend transmission, keeping the buffer position.
    fn pause(&mut self) -> Result<(), Self::Error>;

    /// Resume a paused transmission.
    fn resume(&mut self) -> Result<(), Self::Error>;

    /// Stop transmission entirely.
    fn stop(&mut self) -> Result<(), Self::Error>;
}
