//! # CS43L22 codec driver
//!
//! A `no_std` control driver for the Cirrus Logic CS43L22 stereo DAC with
//! headphone and class-D speaker amplifiers, as found on the STM32F4
//! Discovery board. The chip is configured over I²C; PCM samples arrive over
//! a separate I²S/DMA path that the host owns.
//!
//! The driver is generic over any [`embedded_hal::i2c::I2c`] and
//! [`embedded_hal::delay::DelayNs`] implementation, plus an
//! [`AudioStream`](transport::AudioStream) handle for the sample path.
//!
//! ## Quick start
//!
//! ```ignore
//! use cs43l22::{Cs43l22, OutputDevice};
//!
//! let mut codec = Cs43l22::new(i2c, delay, stream);
//! codec.init(OutputDevice::Auto, 70, 44_100)?;
//! codec.send(&pcm_buffer)?;   // hand the buffer to the I2S DMA
//! codec.play()?;              // power up and unmute
//! ```
//!
//! The control port is write-only apart from the chip ID register, so the
//! driver tracks the routing and playback state it has commanded rather than
//! reading it back.

#![no_std]

pub mod codec;
pub mod control;
pub mod transport;

pub use codec::{Cs43l22, Error, OutputDevice};
pub use control::AudioControl;
pub use transport::AudioStream;
