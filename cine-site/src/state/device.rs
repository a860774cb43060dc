//! Viewport tracking and device classification.

/// Widths below this are phones.
pub const MOBILE_MAX_WIDTH: u32 = 768;

/// Widths from this one up are desktops.
pub const DESKTOP_MIN_WIDTH: u32 = 1024;

/// Discrete device class derived from the viewport width. Drives both
/// layout classes and the error notification channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceClass {
    /// Classifies a viewport width: below 768 is mobile, from 768 up to
    /// but not including 1024 is tablet, anything wider is desktop.
    pub fn from_width(width: u32) -> Self {
        if width < MOBILE_MAX_WIDTH {
            Self::Mobile
        } else if width < DESKTOP_MIN_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }

    /// CSS-friendly name of the class.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

/// Viewport state shared through the device context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceState {
    /// Last observed viewport width in CSS pixels.
    pub width: u32,
}

impl DeviceState {
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    pub fn class(&self) -> DeviceClass {
        DeviceClass::from_width(self.width)
    }

    pub fn is_mobile(&self) -> bool {
        self.class() == DeviceClass::Mobile
    }

    pub fn is_tablet(&self) -> bool {
        self.class() == DeviceClass::Tablet
    }

    pub fn is_desktop(&self) -> bool {
        self.class() == DeviceClass::Desktop
    }
}

#[cfg(test)]
pub mod test {
    use super::*;
    use googletest::prelude::*;

    #[googletest::gtest]
    fn classification_is_boundary_exact() {
        expect_that!(DeviceClass::from_width(767), eq(DeviceClass::Mobile));
        expect_that!(DeviceClass::from_width(768), eq(DeviceClass::Tablet));
        expect_that!(DeviceClass::from_width(1023), eq(DeviceClass::Tablet));
        expect_that!(DeviceClass::from_width(1024), eq(DeviceClass::Desktop));
    }

    #[googletest::gtest]
    fn state_flags_agree_with_class() {
        let state = DeviceState::new(800);
        expect_that!(state.is_mobile(), is_false());
        expect_that!(state.is_tablet(), is_true());
        expect_that!(state.is_desktop(), is_false());
        expect_that!(state.class().as_str(), eq("tablet"));
    }

    #[googletest::gtest]
    fn zero_width_counts_as_mobile() {
        expect_that!(DeviceClass::from_width(0), eq(DeviceClass::Mobile));
    }
}
