//! CS43L22 audio codec driver.
//!
//! Drives the Cirrus Logic CS43L22 stereo DAC over its I²C control port,
//! ported from the ST BSP `cs43l22.c` component driver (~200 lines of
//! control logic).
//!
//! The control port is write-only except for the chip ID register, so the
//! driver keeps its own picture of the commanded routing and playback state.
//! Register-write sequences are order-sensitive: powering the output stage
//! up or down in the wrong order produces audible pops, and skipping the
//! soft-ramp configuration leaves the chip unable to shut down cleanly.
//!
//! # Example
//!
//! ```ignore
//! let mut codec = Cs43l22::new(i2c, delay, stream);
//! codec.init(OutputDevice::Headphone, 80, 44_100)?;
//! codec.send(&samples)?;
//! codec.play()?;
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use super::registers as reg;
use crate::control::AudioControl;
use crate::transport::AudioStream;

/// Settle time between unmuting and re-enabling the output stage in
/// [`Cs43l22::resume`]. Anything much shorter produces an audible pop on
/// the headphone output. Tunable; this is not a datasheet timing.
const RESUME_SETTLE_US: u32 = 100;

// ── Public enums ───────────────────────────────────────────────────────────

/// Output routing selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputDevice {
    /// Class-D speaker amplifier only.
    Speaker,
    /// Headphone amplifier only.
    Headphone,
    /// Speaker and headphone simultaneously.
    Both,
    /// Detect headphone presence from the SPK/HP pin.
    Auto,
}

impl OutputDevice {
    /// The power-control mask written to `POWER_CTL2` for this routing.
    /// Each output has a 2-bit always-on/always-off/detect field.
    fn power_mask(self) -> u8 {
        match self {
            OutputDevice::Speaker => 0xFA,
            OutputDevice::Headphone => 0xAF,
            OutputDevice::Both => 0xAA,
            OutputDevice::Auto => 0x05,
        }
    }
}

impl From<u8> for OutputDevice {
    /// Map the BSP's integer selectors. Unknown values intentionally fall
    /// back to automatic detection rather than failing.
    fn from(raw: u8) -> Self {
        match raw {
            1 => OutputDevice::Speaker,
            2 => OutputDevice::Headphone,
            3 => OutputDevice::Both,
            _ => OutputDevice::Auto,
        }
    }
}

// ── Errors ─────────────────────────────────────────────────────────────────

/// Driver error: a transport-level failure on one of the two buses.
///
/// The driver has no failure modes of its own; invalid inputs are handled
/// by defaulting, not by erroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error<B, S> {
    /// A register read or write on the I²C control port failed.
    Bus(B),
    /// A streaming-transport (I²S/DMA) call failed.
    Stream(S),
}

/// Collects the results of a multi-write register sequence.
///
/// Every write in a sequence is attempted even after one fails, so a
/// partial failure still leaves the chip as close to the target state as
/// possible; the caller re-runs `init` to resynchronize. The first error
/// is the one reported.
struct Sequence<E> {
    first: Option<E>,
}

impl<E> Sequence<E> {
    fn new() -> Self {
        Sequence { first: None }
    }

    fn push(&mut self, result: Result<(), E>) {
        if let Err(e) = result {
            if self.first.is_none() {
                self.first = Some(e);
            }
        }
    }

    fn all_ok(&self) -> bool {
        self.first.is_none()
    }

    fn finish(self) -> Result<(), E> {
        match self.first {
            None => Ok(()),
            Some(e) => Err(e),
        }
    }
}

// ── Driver struct ──────────────────────────────────────────────────────────

/// CS43L22 audio codec driver.
///
/// Generic over the I²C bus, a delay provider (used only for the resume
/// anti-pop settle) and the streaming transport carrying PCM samples.
/// Operations take `&mut self`; hosts needing concurrent access must
/// serialize calls themselves.
pub struct Cs43l22<I2C, D, S> {
    i2c: I2C,
    delay: D,
    stream: S,
    address: u8,
    /// Routing commanded by `init`/`set_output`; restored on unmute/resume.
    output_device: OutputDevice,
    /// True between a successful `play` and the next `stop`.
    playing: bool,
    /// Last commanded logical volume (0–100), for observability.
    volume: u8,
    /// Last requested sample rate, informational only.
    frequency: u32,
}

impl<I2C, D, S> Cs43l22<I2C, D, S>
where
    I2C: I2c,
    D: DelayNs,
    S: AudioStream,
{
    /// Default I2C address (AD0 pin low).
    pub const DEFAULT_ADDRESS: u8 = reg::I2C_ADDR_AD0_LOW;

    /// Alternate I2C address (AD0 pin high).
    pub const ALT_ADDRESS: u8 = reg::I2C_ADDR_AD0_HIGH;

    /// Create a new driver with the default I2C address (0x4A).
    pub fn new(i2c: I2C, delay: D, stream: S) -> Self {
        Self::new_with_address(i2c, delay, stream, Self::DEFAULT_ADDRESS)
    }

    /// Create a new driver with a specific I2C address.
    pub fn new_with_address(i2c: I2C, delay: D, stream: S, address: u8) -> Self {
        Self {
            i2c,
            delay,
            stream,
            address,
            output_device: OutputDevice::Auto,
            playing: false,
            volume: 0,
            frequency: 0,
        }
    }

    // ── Low-level register access ──────────────────────────────────────

    /// Write an 8-bit value to an 8-bit register.
    fn write_reg(&mut self, register: u8, value: u8) -> Result<(), Error<I2C::Error, S::Error>> {
        self.i2c
            .write(self.address, &[register, value])
            .map_err(Error::Bus)
    }

    /// Read an 8-bit value from an 8-bit register.
    fn read_reg(&mut self, register: u8) -> Result<u8, Error<I2C::Error, S::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[register], &mut buf)
            .map_err(Error::Bus)?;
        Ok(buf[0])
    }

    // ── Initialization ─────────────────────────────────────────────────

    /// Bring the codec from an unknown power-on state to a known
    /// configuration.
    ///
    /// Leaves the chip powered down and not playing; call
    /// [`play`](Self::play) to start. The soft-ramp, limiter and tone
    /// writes at the tail shorten the codec's power-off time; without them
    /// the chip needs a long delay between power-down and stopping MCLK,
    /// or it shuts down into loud noise.
    ///
    /// * `output` — output routing, stored for later mute/resume restores.
    /// * `volume` — initial master volume, 0 (mute) to 100 (max).
    /// * `frequency` — sample rate in Hz; recorded but not programmed
    ///   (clocking is left in auto-detect).
    pub fn init(
        &mut self,
        output: OutputDevice,
        volume: u8,
        frequency: u32,
    ) -> Result<(), Error<I2C::Error, S::Error>> {
        self.output_device = output;
        self.frequency = frequency;
        self.playing = false;

        let mut seq = Sequence::new();

        // Keep the codec powered off while reconfiguring.
        seq.push(self.write_reg(reg::POWER_CTL1, 0x01));
        seq.push(self.write_reg(reg::POWER_CTL2, output.power_mask()));
        // Clock auto-detection from MCLK.
        seq.push(self.write_reg(reg::CLOCKING_CTL, 0x81));
        // Slave mode, I2S standard.
        seq.push(self.write_reg(reg::INTERFACE_CTL1, 0x04));
        seq.push(self.set_volume(volume));

        // Speaker path: mono mix, no attenuation. Skipped when the
        // headphone is the only output.
        if output != OutputDevice::Headphone {
            seq.push(self.write_reg(reg::PLAYBACK_CTL2, 0x06));
            seq.push(self.write_reg(reg::SPEAKER_A_VOL, 0x00));
            seq.push(self.write_reg(reg::SPEAKER_B_VOL, 0x00));
        }

        // Disable the analog and digital soft ramps and the limiter
        // attack so power-down completes before MCLK can be stopped.
        seq.push(self.write_reg(reg::ANALOG_ZC_SR_SETT, 0x00));
        seq.push(self.write_reg(reg::MISC_CTL, 0x04));
        seq.push(self.write_reg(reg::LIMIT_CTL1, 0x00));
        // Bass and treble flat.
        seq.push(self.write_reg(reg::TONE_CTL, 0x0F));
        // Nominal PCM input gain.
        seq.push(self.write_reg(reg::PCMA_VOL, 0x0A));
        seq.push(self.write_reg(reg::PCMB_VOL, 0x0A));

        seq.finish()
    }

    /// Read the chip ID register, masked down to the identification bits.
    ///
    /// The CS43L22 reports `0xE0`; the low three revision bits are masked
    /// off and not validated.
    pub fn read_id(&mut self) -> Result<u8, Error<I2C::Error, S::Error>> {
        Ok(self.read_reg(reg::ID)? & reg::ID_MASK)
    }

    /// Read the chip ID and compare it against the expected CS43L22 value.
    pub fn verify_id(&mut self) -> Result<bool, Error<I2C::Error, S::Error>> {
        Ok(self.read_id()? == reg::CHIP_ID)
    }

    /// Reset the codec registers to their defaults.
    ///
    /// The CS43L22 is reset through its dedicated /RESET line, which the
    /// host wires to a GPIO; there is nothing to do over the control port.
    pub fn reset(&mut self) -> Result<(), Error<I2C::Error, S::Error>> {
        Ok(())
    }

    // ── Playback control ───────────────────────────────────────────────

    /// Hand a caller-supplied PCM buffer to the streaming transport.
    ///
    /// No sample processing is done here; the buffer goes to
    /// [`AudioStream::start`] as-is.
    pub fn send(&mut self, buffer: &[u16]) -> Result<(), Error<I2C::Error, S::Error>> {
        self.stream.start(buffer).map_err(Error::Stream)
    }

    /// Power up the output stage and unmute.
    ///
    /// A no-op while already playing, so a redundant call cannot re-issue
    /// the power-up sequence and click.
    pub fn play(&mut self) -> Result<(), Error<I2C::Error, S::Error>> {
        if self.playing {
            return Ok(());
        }

        let mut seq = Sequence::new();
        // Digital soft ramp on for the gain change at power-up.
        seq.push(self.write_reg(reg::MISC_CTL, 0x06));
        seq.push(self.set_mute(false));
        seq.push(self.write_reg(reg::POWER_CTL1, 0x9E));
        self.playing = true;

        seq.finish()
    }

    /// Mute, drop into power save, and pause the sample stream.
    pub fn pause(&mut self) -> Result<(), Error<I2C::Error, S::Error>> {
        let mut seq = Sequence::new();
        // Mute before removing power.
        seq.push(self.set_mute(true));
        seq.push(self.write_reg(reg::POWER_CTL1, 0x01));

        if seq.all_ok() {
            seq.push(self.stream.pause().map_err(Error::Stream));
        }
        seq.finish()
    }

    /// Leave power save and resume a paused stream.
    pub fn resume(&mut self) -> Result<(), Error<I2C::Error, S::Error>> {
        let mut seq = Sequence::new();
        seq.push(self.set_mute(false));

        // Let the unmute settle before the output stage powers back up,
        // or the transition is audible.
        self.delay.delay_us(RESUME_SETTLE_US);

        seq.push(self.write_reg(reg::POWER_CTL2, self.output_device.power_mask()));
        seq.push(self.write_reg(reg::POWER_CTL1, 0x9E));

        if seq.all_ok() {
            seq.push(self.stream.resume().map_err(Error::Stream));
        }
        seq.finish()
    }

    /// Stop the stream and power the codec down.
    ///
    /// After a stop the codec must be re-initialized before playing again
    /// if it is physically powered off in the meantime.
    pub fn stop(&mut self) -> Result<(), Error<I2C::Error, S::Error>> {
        let mut seq = Sequence::new();
        seq.push(self.stream.stop().map_err(Error::Stream));

        // Mute before removing power.
        seq.push(self.set_mute(true));
        // Digital soft ramp off so power-down completes promptly.
        seq.push(self.write_reg(reg::MISC_CTL, 0x04));
        // Power down the DAC and the speaker amplifier.
        seq.push(self.write_reg(reg::POWER_CTL1, 0x9F));
        self.playing = false;

        seq.finish()
    }

    // ── Volume, mute, routing ──────────────────────────────────────────

    /// Set the master volume on both channels (0 = silent, 100 = max).
    pub fn set_volume(&mut self, volume: u8) -> Result<(), Error<I2C::Error, S::Error>> {
        let code = convert_volume(volume);

        let mut seq = Sequence::new();
        seq.push(self.write_reg(reg::MASTER_A_VOL, code));
        seq.push(self.write_reg(reg::MASTER_B_VOL, code));
        self.volume = volume;

        seq.finish()
    }

    /// Mute or unmute the outputs.
    ///
    /// Muting forces every output channel off and drops the headphone
    /// volume to its floor; unmuting restores the headphone volume and the
    /// currently commanded routing.
    pub fn set_mute(&mut self, mute: bool) -> Result<(), Error<I2C::Error, S::Error>> {
        let mut seq = Sequence::new();
        if mute {
            seq.push(self.write_reg(reg::POWER_CTL2, 0xFF));
            seq.push(self.write_reg(reg::HEADPHONE_A_VOL, 0x01));
            seq.push(self.write_reg(reg::HEADPHONE_B_VOL, 0x01));
        } else {
            seq.push(self.write_reg(reg::HEADPHONE_A_VOL, 0x00));
            seq.push(self.write_reg(reg::HEADPHONE_B_VOL, 0x00));
            seq.push(self.write_reg(reg::POWER_CTL2, self.output_device.power_mask()));
        }
        seq.finish()
    }

    /// Switch the output routing, live if audio is playing.
    pub fn set_output(&mut self, output: OutputDevice) -> Result<(), Error<I2C::Error, S::Error>> {
        self.output_device = output;
        self.write_reg(reg::POWER_CTL2, output.power_mask())
    }

    /// Record a new sample rate, stopping playback first if needed.
    ///
    /// The clocking register stays in auto-detect; only the requested rate
    /// is stored.
    // TODO: program the CLOCKING_CTL speed-mode/ratio bits for the
    // requested rate instead of relying on auto-detect.
    pub fn set_frequency(&mut self, frequency: u32) -> Result<(), Error<I2C::Error, S::Error>> {
        if self.playing {
            self.stop()?;
        }
        self.frequency = frequency;
        Ok(())
    }

    // ── State accessors ────────────────────────────────────────────────

    /// Whether a `play` has been issued without a subsequent `stop`.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// The currently commanded output routing.
    pub fn output_device(&self) -> OutputDevice {
        self.output_device
    }

    /// The last commanded logical volume (0–100).
    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// The last requested sample rate in Hz.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    // ── Release ────────────────────────────────────────────────────────

    /// Consume the driver and return the bus, delay and stream handles.
    pub fn release(self) -> (I2C, D, S) {
        (self.i2c, self.delay, self.stream)
    }
}

/// Convert a logical volume (0–100) to the master-volume register code.
///
/// The register uses a sign-wrapped encoding: after scaling to 0–255,
/// values above 0xE6 land in the wrap segment (small positive gain,
/// `scaled - 0xE7`) and the rest in the attenuation segment
/// (`scaled + 0x19`). The breakpoint and offsets are what the chip
/// expects; they must not be adjusted.
fn convert_volume(volume: u8) -> u8 {
    let scaled = if volume > 100 {
        255
    } else {
        (volume as u16 * 255 / 100) as u8
    };
    if scaled > 0xE6 {
        scaled - 0xE7
    } else {
        scaled + 0x19
    }
}

// ── AudioControl trait implementation ──────────────────────────────────────

impl<I2C, D, S> AudioControl for Cs43l22<I2C, D, S>
where
    I2C: I2c,
    D: DelayNs,
    S: AudioStream,
{
    type Error = Error<I2C::Error, S::Error>;

    fn play(&mut self) -> Result<(), Self::Error> {
        Cs43l22::play(self)
    }

    fn pause(&mut self) -> Result<(), Self::Error> {
        Cs43l22::pause(self)
    }

    fn resume(&mut self) -> Result<(), Self::Error> {
        Cs43l22::resume(self)
    }

    fn stop(&mut self) -> Result<(), Self::Error> {
        Cs43l22::stop(self)
    }

    fn set_volume(&mut self, volume: u8) -> Result<(), Self::Error> {
        Cs43l22::set_volume(self, volume)
    }

    fn set_mute(&mut self, mute: bool) -> Result<(), Self::Error> {
        Cs43l22::set_mute(self, mute)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
