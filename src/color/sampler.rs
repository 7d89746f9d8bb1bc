//! Constrained color sampling with interchangeable sequencing policies
//!
//! Every sampler shares one set of per-channel bounds. The policy decides how
//! each unfixed channel moves from one color to the next:
//! - `Uniform` draws every channel independently
//! - `Offset` advances every channel by a fixed fraction of its span
//! - `GoldenRatio` advances hue by the golden ratio conjugate of its span and
//!   draws the remaining channels uniformly, so consecutive hues never cluster

use crate::color::hsv::{Channel, HsvColor};
use crate::io::error::{ArtError, Result, invalid_parameter};
use crate::math::probability::GOLDEN_RATIO_CONJUGATE;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of an unbounded sequence of colors
pub trait ColorSequence {
    /// Produce the next color of the sequence
    ///
    /// # Errors
    ///
    /// Returns `ChannelOutOfRange` if a produced channel escapes its bounds
    fn next_color(&mut self) -> Result<HsvColor>;
}

/// Closed interval a channel may be sampled from
///
/// Sampled values lie in `[min, max)`; when `min == max` the channel is
/// fixed and every sample equals that constant exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRange {
    min: f64,
    max: f64,
}

impl ChannelRange {
    /// Create a validated range for `channel`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless `0 <= min <= max <= channel.limit()`
    pub fn new(channel: Channel, min: f64, max: f64) -> Result<Self> {
        let valid = min.is_finite() && max.is_finite() && 0.0 <= min && min <= max;
        if !valid || max > channel.limit() {
            return Err(invalid_parameter(
                "channel_range",
                &format!("{channel} [{min}, {max}]"),
                &format!("bounds must satisfy 0 <= min <= max <= {}", channel.limit()),
            ));
        }
        Ok(Self { min, max })
    }

    /// The unconstrained range of `channel`
    pub const fn full(channel: Channel) -> Self {
        Self {
            min: 0.0,
            max: channel.limit(),
        }
    }

    /// Inclusive lower bound
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Exclusive upper bound
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Width of the range
    pub const fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether the range pins the channel to a single value
    // Fixed ranges are built from one literal value, so equality is exact
    #[allow(clippy::float_cmp)]
    pub const fn is_fixed(&self) -> bool {
        self.min == self.max
    }

    /// Whether `value` is a legal sample of this range
    // Fixed ranges demand the exact constant
    #[allow(clippy::float_cmp)]
    pub const fn admits(&self, value: f64) -> bool {
        if self.is_fixed() {
            value == self.min
        } else {
            self.min <= value && value < self.max
        }
    }
}

/// Per-channel bounds shared by every sampling policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorConstraints {
    ranges: [ChannelRange; 3],
}

impl Default for ColorConstraints {
    fn default() -> Self {
        Self {
            ranges: Channel::ALL.map(ChannelRange::full),
        }
    }
}

impl ColorConstraints {
    /// Bounds currently applied to `channel`
    pub fn range(&self, channel: Channel) -> ChannelRange {
        self.ranges
            .get(channel.index())
            .copied()
            .unwrap_or_else(|| ChannelRange::full(channel))
    }

    /// Replace the bounds of `channel`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the bounds are invalid for the channel
    pub fn set_range(&mut self, channel: Channel, min: f64, max: f64) -> Result<()> {
        let range = ChannelRange::new(channel, min, max)?;
        if let Some(slot) = self.ranges.get_mut(channel.index()) {
            *slot = range;
        }
        Ok(())
    }

    /// Pin `channel` to a single value
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the value is outside the channel limits
    pub fn fix(&mut self, channel: Channel, value: f64) -> Result<()> {
        self.set_range(channel, value, value)
    }

    /// Whether `channel` is pinned to a single value
    pub fn is_fixed(&self, channel: Channel) -> bool {
        self.range(channel).is_fixed()
    }
}

/// How unfixed channels move between successive colors
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SamplingPolicy {
    /// Independent uniform draws, no relation between successive colors
    Uniform,
    /// Every unfixed channel advances by `step` times its span, wrapping
    Offset {
        /// Fraction of the channel span added per color, `[0, 1]`
        step: f64,
    },
    /// Hue advances by the golden ratio conjugate of its span; saturation
    /// and brightness are drawn uniformly
    GoldenRatio,
}

impl SamplingPolicy {
    fn validate(self) -> Result<Self> {
        if let Self::Offset { step } = self {
            if !step.is_finite() || !(0.0..=1.0).contains(&step) {
                return Err(invalid_parameter("offset", &step, &"must lie in [0, 1]"));
            }
        }
        Ok(self)
    }

    /// Fraction of the span `channel` advances by, if it advances at all
    fn step_for(self, channel: Channel) -> Option<f64> {
        match (self, channel) {
            (Self::Uniform, _) | (Self::GoldenRatio, Channel::Saturation | Channel::Brightness) => {
                None
            }
            (Self::Offset { step }, _) => Some(step),
            (Self::GoldenRatio, Channel::Hue) => Some(GOLDEN_RATIO_CONJUGATE),
        }
    }
}

/// Stateful color generator under per-channel constraints
///
/// The last produced color seeds the next one. For advancing channels the
/// very first output is the starting state itself (set by `starting_from`,
/// otherwise drawn uniformly on first use).
#[derive(Debug, Clone)]
pub struct ColorSampler {
    policy: SamplingPolicy,
    constraints: ColorConstraints,
    current: Option<HsvColor>,
    start: Option<HsvColor>,
    rng: StdRng,
}

impl ColorSampler {
    /// Create a sampler with the given policy and a deterministic seed
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if an offset step lies outside `[0, 1]`
    pub fn new(policy: SamplingPolicy, seed: u64) -> Result<Self> {
        Ok(Self {
            policy: policy.validate()?,
            constraints: ColorConstraints::default(),
            current: None,
            start: None,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Sampler drawing every channel uniformly
    pub fn uniform(seed: u64) -> Self {
        Self::with_valid_policy(SamplingPolicy::Uniform, seed)
    }

    /// Sampler advancing every unfixed channel by `step` of its span
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `step` lies outside `[0, 1]`
    pub fn offset(step: f64, seed: u64) -> Result<Self> {
        Self::new(SamplingPolicy::Offset { step }, seed)
    }

    /// Sampler stepping hue by the golden ratio conjugate
    pub fn golden_ratio(seed: u64) -> Self {
        Self::with_valid_policy(SamplingPolicy::GoldenRatio, seed)
    }

    fn with_valid_policy(policy: SamplingPolicy, seed: u64) -> Self {
        Self {
            policy,
            constraints: ColorConstraints::default(),
            current: None,
            start: None,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Restrict hue to `[min, max)`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless `0 <= min <= max <= 360`
    pub fn with_hue_range(mut self, min: f64, max: f64) -> Result<Self> {
        self.constraints.set_range(Channel::Hue, min, max)?;
        Ok(self)
    }

    /// Restrict saturation to `[min, max)`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless `0 <= min <= max <= 1`
    pub fn with_saturation_range(mut self, min: f64, max: f64) -> Result<Self> {
        self.constraints.set_range(Channel::Saturation, min, max)?;
        Ok(self)
    }

    /// Restrict brightness to `[min, max)`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` unless `0 <= min <= max <= 1`
    pub fn with_brightness_range(mut self, min: f64, max: f64) -> Result<Self> {
        self.constraints.set_range(Channel::Brightness, min, max)?;
        Ok(self)
    }

    /// Pin hue to a single value
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the value lies outside `[0, 360]`
    pub fn with_hue(mut self, value: f64) -> Result<Self> {
        self.constraints.fix(Channel::Hue, value)?;
        Ok(self)
    }

    /// Pin saturation to a single value
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the value lies outside `[0, 1]`
    pub fn with_saturation(mut self, value: f64) -> Result<Self> {
        self.constraints.fix(Channel::Saturation, value)?;
        Ok(self)
    }

    /// Pin brightness to a single value
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the value lies outside `[0, 1]`
    pub fn with_brightness(mut self, value: f64) -> Result<Self> {
        self.constraints.fix(Channel::Brightness, value)?;
        Ok(self)
    }

    /// Use `color` as the first output of advancing channels
    ///
    /// Fixed and uniformly drawn channels ignore the start, so only the
    /// advancing channels are checked against the current bounds. Bounds
    /// narrowed afterwards are checked when the first color is drawn.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the policy is `Uniform`, which has no
    /// starting state, or if a channel exceeds its limits.
    /// Returns `ChannelOutOfRange` if an advancing channel starts outside
    /// its bounds.
    pub fn starting_from(mut self, color: HsvColor) -> Result<Self> {
        if matches!(self.policy, SamplingPolicy::Uniform) {
            return Err(invalid_parameter(
                "start",
                &format!("{color:?}"),
                &"uniform sampling draws every color independently",
            ));
        }
        for channel in Channel::ALL {
            let value = color.channel(channel);
            ChannelRange::new(channel, value, value)?;

            let range = self.constraints.range(channel);
            let advances = self.policy.step_for(channel).is_some() && !range.is_fixed();
            if advances && !range.admits(value) {
                return Err(ArtError::ChannelOutOfRange {
                    channel,
                    value,
                    min: range.min(),
                    max: range.max(),
                });
            }
        }
        self.start = Some(color);
        self.current = None;
        Ok(self)
    }

    /// Pin saturation for all subsequent colors
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the value lies outside `[0, 1]`
    pub fn set_saturation(&mut self, value: f64) -> Result<()> {
        self.constraints.fix(Channel::Saturation, value)
    }

    /// Pin brightness for all subsequent colors
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the value lies outside `[0, 1]`
    pub fn set_brightness(&mut self, value: f64) -> Result<()> {
        self.constraints.fix(Channel::Brightness, value)
    }

    /// Active sequencing policy
    pub const fn policy(&self) -> SamplingPolicy {
        self.policy
    }

    /// Channel bounds shared by the policy
    pub const fn constraints(&self) -> &ColorConstraints {
        &self.constraints
    }

    /// Last produced color, if any
    pub const fn current(&self) -> Option<HsvColor> {
        self.current
    }

    fn sample_channel(&mut self, channel: Channel) -> f64 {
        let range = self.constraints.range(channel);
        if range.is_fixed() {
            return range.min();
        }

        let Some(step) = self.policy.step_for(channel) else {
            return self.rng.random_range(range.min()..range.max());
        };

        match self.current {
            Some(previous) => {
                let span = range.span();
                let mut offset =
                    (previous.channel(channel) - range.min() + step * span).rem_euclid(span);
                // rem_euclid may round up to the divisor for tiny negative inputs
                if offset >= span {
                    offset -= span;
                }
                range.min() + offset
            }
            None => match self.start {
                Some(start) => start.channel(channel),
                None => self.rng.random_range(range.min()..range.max()),
            },
        }
    }
}

impl ColorSequence for ColorSampler {
    fn next_color(&mut self) -> Result<HsvColor> {
        let mut color = HsvColor::BLACK;
        for channel in Channel::ALL {
            let value = self.sample_channel(channel);
            let range = self.constraints.range(channel);
            if !range.admits(value) {
                return Err(ArtError::ChannelOutOfRange {
                    channel,
                    value,
                    min: range.min(),
                    max: range.max(),
                });
            }
            color.set_channel(channel, value);
        }
        self.current = Some(color);
        Ok(color)
    }
}
