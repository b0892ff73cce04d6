//! Declarative reveal parameters handed to the animation engine.
//!
//! Nothing here animates. Each preset describes the hidden starting pose and the
//! transition into the visible pose; the engine interpolates between them.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MotionLevel {
    Full,
    Reduced,
    None,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    Power3Out,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RevealPreset {
    FadeIn,
    SlideUp,
    SlideInLeft,
    SlideInRight,
    ScaleIn,
    Letter,
}

/// Pose an element starts from before it is revealed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct HiddenPose {
    pub opacity_pct: u8,
    pub offset_x_px: i16,
    pub offset_y_px: i16,
    pub scale_pct: u8,
}

impl Default for HiddenPose {
    fn default() -> Self {
        Self {
            opacity_pct: 0,
            offset_x_px: 0,
            offset_y_px: 0,
            scale_pct: 100,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Reveal {
    pub hidden: HiddenPose,
    pub duration_ms: u16,
    pub delay_ms: u16,
    pub easing: Easing,
}

impl Reveal {
    pub fn new(duration_ms: u16) -> Self {
        Self {
            hidden: HiddenPose::default(),
            duration_ms,
            delay_ms: 0,
            easing: Easing::EaseOut,
        }
    }

    pub fn offset(mut self, x_px: i16, y_px: i16) -> Self {
        self.hidden.offset_x_px = x_px;
        self.hidden.offset_y_px = y_px;
        self
    }

    pub fn scale_pct(mut self, scale_pct: u8) -> Self {
        self.hidden.scale_pct = scale_pct;
        self
    }

    pub fn delay_ms(mut self, delay_ms: u16) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Applies the user's motion preference. Reduced motion keeps the fade and drops
    /// movement; no motion makes the element appear instantly.
    pub fn with_level(self, level: MotionLevel) -> Self {
        match level {
            MotionLevel::Full => self,
            MotionLevel::Reduced => Self {
                hidden: HiddenPose::default(),
                ..self
            },
            MotionLevel::None => Self {
                hidden: HiddenPose {
                    opacity_pct: 100,
                    ..HiddenPose::default()
                },
                duration_ms: 0,
                delay_ms: 0,
                easing: Easing::Linear,
            },
        }
    }
}

impl RevealPreset {
    pub fn reveal(self) -> Reveal {
        match self {
            RevealPreset::FadeIn => Reveal::new(600),
            RevealPreset::SlideUp => Reveal::new(800).offset(0, 60),
            RevealPreset::SlideInLeft => Reveal::new(800).offset(-60, 0),
            RevealPreset::SlideInRight => Reveal::new(800).offset(60, 0),
            RevealPreset::ScaleIn => Reveal::new(500).scale_pct(80),
            RevealPreset::Letter => Reveal::new(500).offset(0, 50),
        }
    }
}

/// Timing for revealing a list of children one after another.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Stagger {
    pub delay_ms: u16,
    pub children_ms: u16,
}

impl Default for Stagger {
    fn default() -> Self {
        Self {
            delay_ms: 200,
            children_ms: 100,
        }
    }
}

impl Stagger {
    pub fn child_delay_ms(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        u32::from(self.delay_ms).saturating_add(u32::from(self.children_ms).saturating_mul(index))
    }

    /// The `index`th child's reveal, delayed by its place in the list.
    pub fn child(&self, preset: RevealPreset, index: usize) -> Reveal {
        let delay = u16::try_from(self.child_delay_ms(index)).unwrap_or(u16::MAX);
        preset.reveal().delay_ms(delay)
    }
}

/// Where a scroll-triggered reveal starts and ends, as viewport percentages from the top.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScrollTrigger {
    pub start_pct: u8,
    pub end_pct: u8,
    pub reverse_on_leave: bool,
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self {
            start_pct: 80,
            end_pct: 20,
            reverse_on_leave: true,
        }
    }
}

/// Reveal played by scroll-triggered blocks.
pub fn scroll_reveal() -> Reveal {
    Reveal::new(1000).offset(0, 60).easing(Easing::Power3Out)
}
