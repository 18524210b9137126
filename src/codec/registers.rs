//! CS43L22 register addresses and identification constants.
//!
//! Taken from the Cirrus Logic CS43L22 datasheet. Register addresses and
//! values are 8-bit; the control port is write-only apart from the chip ID
//! and status registers.

// The full map is defined for completeness (beep generator, passthrough,
// battery compensation, etc.) but not all of it is used by the driver.
#![allow(dead_code)]

// ── I2C addresses ──────────────────────────────────────────────────────────

/// Default I2C address (AD0 pin low).
pub const I2C_ADDR_AD0_LOW: u8 = 0x4A;

/// Alternate I2C address (AD0 pin high).
pub const I2C_ADDR_AD0_HIGH: u8 = 0x4B;

// ── Chip identification ────────────────────────────────────────────────────

/// Chip ID / revision register (read-only).
/// - Bits 7:3 — CHIPID (11100b for the CS43L22)
/// - Bits 2:0 — REVID (A0/A1/B0/B1)
pub const ID: u8 = 0x01;

/// Expected value of [`ID`] after masking with [`ID_MASK`].
pub const CHIP_ID: u8 = 0xE0;

/// Mask selecting the CHIPID bits; the revision bits are not validated.
pub const ID_MASK: u8 = 0xF8;

// ── Power control ──────────────────────────────────────────────────────────

/// Power control 1: master power-down state machine.
/// 0x01 = powered down, 0x9E = powered up, 0x9F = powered down (DAC+SPK).
pub const POWER_CTL1: u8 = 0x02;

/// Power control 2: per-output (speaker/headphone) channel power.
/// Each output has a 2-bit field: always-on, always-off, or pin-detected.
pub const POWER_CTL2: u8 = 0x04;

// ── Clocking and interface ─────────────────────────────────────────────────

/// Clocking control: speed mode, MCLK ratio. 0x81 = auto-detect.
pub const CLOCKING_CTL: u8 = 0x05;

/// Interface control 1: role, DSP mode, interface format, word length.
/// 0x04 = slave mode, I2S up to 24-bit.
pub const INTERFACE_CTL1: u8 = 0x06;

/// Interface control 2.
pub const INTERFACE_CTL2: u8 = 0x07;

// ── Passthrough ────────────────────────────────────────────────────────────

pub const PASSTHR_A_SELECT: u8 = 0x08;
pub const PASSTHR_B_SELECT: u8 = 0x09;

/// Analog zero-cross and soft-ramp settings. 0x00 disables both.
pub const ANALOG_ZC_SR_SETT: u8 = 0x0A;

pub const PASSTHR_GANG_CTL: u8 = 0x0C;

// ── Playback ───────────────────────────────────────────────────────────────

pub const PLAYBACK_CTL1: u8 = 0x0D;

/// Miscellaneous control: digital soft-ramp and zero-cross enables,
/// de-emphasis, freeze. Bit 1 is the digital soft-ramp enable.
pub const MISC_CTL: u8 = 0x0E;

/// Playback control 2: headphone/speaker mute, speaker mono and
/// channel-swap bits. 0x06 selects speaker mono mode.
pub const PLAYBACK_CTL2: u8 = 0x0F;

pub const PASSTHR_A_VOL: u8 = 0x14;
pub const PASSTHR_B_VOL: u8 = 0x15;

// ── Volume ─────────────────────────────────────────────────────────────────

/// PCM channel A volume (serial-port input gain).
pub const PCMA_VOL: u8 = 0x1A;

/// PCM channel B volume.
pub const PCMB_VOL: u8 = 0x1B;

// ── Beep generator and tone control ────────────────────────────────────────

pub const BEEP_FREQ_ON_TIME: u8 = 0x1C;
pub const BEEP_VOL_OFF_TIME: u8 = 0x1D;
pub const BEEP_TONE_CFG: u8 = 0x1E;

/// Tone control: bass/treble gain, 0x0F = both flat (0 dB).
pub const TONE_CTL: u8 = 0x1F;

/// Master volume, channel A. Sign-wrapped encoding: 0x19..=0xFF is
/// attenuation up to 0 dB, 0x00..=0x18 wraps to small positive gain.
pub const MASTER_A_VOL: u8 = 0x20;

/// Master volume, channel B.
pub const MASTER_B_VOL: u8 = 0x21;

/// Headphone channel A volume. 0x00 = 0 dB, 0x01 = full attenuation.
pub const HEADPHONE_A_VOL: u8 = 0x22;

/// Headphone channel B volume.
pub const HEADPHONE_B_VOL: u8 = 0x23;

/// Speaker channel A volume. 0x00 = no attenuation.
pub const SPEAKER_A_VOL: u8 = 0x24;

/// Speaker channel B volume.
pub const SPEAKER_B_VOL: u8 = 0x25;

pub const CH_MIXER_SWAP: u8 = 0x26;

// ── Limiter ────────────────────────────────────────────────────────────────

/// Limiter control 1: thresholds and soft-knee. 0x00 disables the attack.
pub const LIMIT_CTL1: u8 = 0x27;
pub const LIMIT_CTL2: u8 = 0x28;
pub const LIMIT_ATTACK_RATE: u8 = 0x29;

// ── Status and monitoring ──────────────────────────────────────────────────

pub const OVF_CLK_STATUS: u8 = 0x2E;
pub const BATT_COMPENSATION: u8 = 0x2F;
pub const VP_BATTERY_LEVEL: u8 = 0x30;
pub const SPEAKER_STATUS: u8 = 0x31;
pub const TEMPMONITOR_CTL: u8 = 0x32;
pub const THERMAL_FOLDBACK: u8 = 0x33;
pub const CHARGE_PUMP_FREQ: u8 = 0x34;
