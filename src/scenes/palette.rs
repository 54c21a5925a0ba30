//! Brand kit and the handful of UI tints the scenes use.

use crate::foundation::core::Rgba8Premul;

pub const NAVY: Rgba8Premul = Rgba8Premul::opaque(0x0b, 0x2e, 0x5f);
pub const GREEN: Rgba8Premul = Rgba8Premul::opaque(0x3f, 0xb2, 0x67);
pub const SLATE: Rgba8Premul = Rgba8Premul::opaque(0x2f, 0x3a, 0x4a);
pub const GREY: Rgba8Premul = Rgba8Premul::opaque(0x8a, 0x94, 0xa6);
pub const WHITE: Rgba8Premul = Rgba8Premul::opaque(0xff, 0xff, 0xff);
pub const GREY_LIGHT: Rgba8Premul = Rgba8Premul::opaque(0xf8, 0xfa, 0xfc);

/// Default stage color behind every act.
pub const BACKDROP: Rgba8Premul = GREY_LIGHT;

pub const INDIGO: Rgba8Premul = Rgba8Premul::opaque(0x66, 0x7e, 0xea);
pub const ROSE: Rgba8Premul = Rgba8Premul::opaque(0xf4, 0x3f, 0x5e);
pub const RED: Rgba8Premul = Rgba8Premul::opaque(0xdc, 0x26, 0x26);
pub const INK: Rgba8Premul = Rgba8Premul::opaque(0x1f, 0x29, 0x37);
pub const MUTED: Rgba8Premul = Rgba8Premul::opaque(0x6b, 0x72, 0x80);

pub const WIN_TINT: Rgba8Premul = Rgba8Premul::opaque(0xf0, 0xfd, 0xf4);
pub const WIN_BORDER: Rgba8Premul = Rgba8Premul::opaque(0xbb, 0xf7, 0xd0);
pub const LOSS_TINT: Rgba8Premul = Rgba8Premul::opaque(0xfe, 0xf2, 0xf2);
pub const LOSS_BORDER: Rgba8Premul = Rgba8Premul::opaque(0xfe, 0xca, 0xca);

/// Navy at 8% for hairline borders.
pub fn navy_light() -> Rgba8Premul {
    NAVY.with_alpha(0x15 as f64 / 255.0)
}

/// Green at 12% for soft glows.
pub fn green_light() -> Rgba8Premul {
    GREEN.with_alpha(0x20 as f64 / 255.0)
}

/// Terminal theme.
pub mod term {
    use crate::foundation::core::Rgba8Premul;

    pub const WINDOW: Rgba8Premul = Rgba8Premul::opaque(0x0d, 0x11, 0x17);
    pub const TITLE_BAR: Rgba8Premul = Rgba8Premul::opaque(0x16, 0x1b, 0x22);
    pub const RULE: Rgba8Premul = Rgba8Premul::opaque(0x30, 0x36, 0x3d);
    pub const TITLE: Rgba8Premul = Rgba8Premul::opaque(0x8b, 0x94, 0x9e);
    pub const CLOSE: Rgba8Premul = Rgba8Premul::opaque(0xff, 0x5f, 0x57);
    pub const MINIMIZE: Rgba8Premul = Rgba8Premul::opaque(0xfe, 0xbc, 0x2e);
    pub const ZOOM: Rgba8Premul = Rgba8Premul::opaque(0x28, 0xc8, 0x40);
    pub const TEXT: Rgba8Premul = Rgba8Premul::opaque(0xc9, 0xd1, 0xd9);
    pub const PROMPT: Rgba8Premul = Rgba8Premul::opaque(0x7e, 0xe7, 0x87);
    pub const COMMAND: Rgba8Premul = Rgba8Premul::opaque(0x79, 0xc0, 0xff);
    pub const LOGO: Rgba8Premul = Rgba8Premul::opaque(0x58, 0xa6, 0xff);
    pub const CURSOR: Rgba8Premul = Rgba8Premul::opaque(0x33, 0x33, 0x33);
    pub const ALERT: Rgba8Premul = Rgba8Premul::opaque(0xf9, 0x75, 0x83);
    pub const OK: Rgba8Premul = Rgba8Premul::opaque(0x7e, 0xe7, 0x87);
    pub const HINT: Rgba8Premul = Rgba8Premul::opaque(0xd2, 0xa8, 0xff);
}
