/// Trait for audio components that support runtime playback control
/// (e.g., codec chips).
pub trait AudioControl {
    /// Error type for control operations.
    type Error;

    /// Start playback: power up the output stage and unmute.
    fn play(&mut self) -> Result<(), Self::Error>;

    /// Pause playback: mute, enter power save, suspend the sample stream.
    fn pause(&mut self) -> Result<(), Self::Error>;

    /// Resume playback after [`pause`](Self::pause).
    fn resume(&mut self) -> Result<(), Self::Error>;

    /// Stop playback and power the output stage down.
    fn stop(&mut self) -> Result<(), Self::Error>;

    /// Set the master volume (0 = silent, 100 = maximum).
    fn set_volume(&mut self, volume: u8) -> Result<(), Self::Error>;

    /// Mute or unmute the outputs without touching playback state.
    fn set_mute(&mut self, mute: bool) -> Result<(), Self::Error>;
}
