//
// Copyright 2024-2026 the pipetint authors. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! SGR style model: text attributes, colors, and escape-code emission.

/// Terminal color palette.
///
/// The sixteen named variants cover the classic 4-bit palette. `Fixed` and
/// `Rgb` exist so that 256-color and 24-bit sequences found in input streams
/// produced by other tools survive a round trip through the model; the color
/// catalog itself only hands out named variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// Black (FG `30`, BG `40`)
    Black,
    /// Red (FG `31`, BG `41`)
    Red,
    /// Green (FG `32`, BG `42`)
    Green,
    /// Yellow (FG `33`, BG `43`)
    Yellow,
    /// Blue (FG `34`, BG `44`)
    Blue,
    /// Purple/Magenta (FG `35`, BG `45`)
    Purple,
    /// Cyan (FG `36`, BG `46`)
    Cyan,
    /// White (FG `37`, BG `47`)
    White,
    /// Bright Black (FG `90`, BG `100`)
    BrightBlack,
    /// Bright Red (FG `91`, BG `101`)
    BrightRed,
    /// Bright Green (FG `92`, BG `102`)
    BrightGreen,
    /// Bright Yellow (FG `93`, BG `103`)
    BrightYellow,
    /// Bright Blue (FG `94`, BG `104`)
    BrightBlue,
    /// Bright Purple (FG `95`, BG `105`)
    BrightPurple,
    /// Bright Cyan (FG `96`, BG `106`)
    BrightCyan,
    /// Bright White (FG `97`, BG `107`)
    BrightWhite,
    /// 256-color palette index (`38;5;n` / `48;5;n`)
    Fixed(u8),
    /// 24-bit color (`38;2;r;g;b` / `48;2;r;g;b`)
    Rgb(u8, u8, u8),
}

impl Color {
    /// Appends this color's foreground SGR parameters to `codes`.
    fn push_foreground(&self, codes: &mut Vec<String>) {
        match self {
            Color::Black => codes.push("30".to_string()),
            Color::Red => codes.push("31".to_string()),
            Color::Green => codes.push("32".to_string()),
            Color::Yellow => codes.push("33".to_string()),
            Color::Blue => codes.push("34".to_string()),
            Color::Purple => codes.push("35".to_string()),
            Color::Cyan => codes.push("36".to_string()),
            Color::White => codes.push("37".to_string()),
            Color::BrightBlack => codes.push("90".to_string()),
            Color::BrightRed => codes.push("91".to_string()),
            Color::BrightGreen => codes.push("92".to_string()),
            Color::BrightYellow => codes.push("93".to_string()),
            Color::BrightBlue => codes.push("94".to_string()),
            Color::BrightPurple => codes.push("95".to_string()),
            Color::BrightCyan => codes.push("96".to_string()),
            Color::BrightWhite => codes.push("97".to_string()),
            Color::Fixed(n) => {
                codes.push("38".to_string());
                codes.push("5".to_string());
                codes.push(n.to_string());
            }
            Color::Rgb(r, g, b) => {
                codes.push("38".to_string());
                codes.push("2".to_string());
                codes.push(r.to_string());
                codes.push(g.to_string());
                codes.push(b.to_string());
            }
        }
    }

    /// Appends this color's background SGR parameters to `codes`.
    fn push_background(&self, codes: &mut Vec<String>) {
        match self {
            Color::Black => codes.push("40".to_string()),
            Color::Red => codes.push("41".to_string()),
            Color::Green => codes.push("42".to_string()),
            Color::Yellow => codes.push("43".to_string()),
            Color::Blue => codes.push("44".to_string()),
            Color::Purple => codes.push("45".to_string()),
            Color::Cyan => codes.push("46".to_string()),
            Color::White => codes.push("47".to_string()),
            Color::BrightBlack => codes.push("100".to_string()),
            Color::BrightRed => codes.push("101".to_string()),
            Color::BrightGreen => codes.push("102".to_string()),
            Color::BrightYellow => codes.push("103".to_string()),
            Color::BrightBlue => codes.push("104".to_string()),
            Color::BrightPurple => codes.push("105".to_string()),
            Color::BrightCyan => codes.push("106".to_string()),
            Color::BrightWhite => codes.push("107".to_string()),
            Color::Fixed(n) => {
                codes.push("48".to_string());
                codes.push("5".to_string());
                codes.push(n.to_string());
            }
            Color::Rgb(r, g, b) => {
                codes.push("48".to_string());
                codes.push("2".to_string());
                codes.push(r.to_string());
                codes.push(g.to_string());
                codes.push(b.to_string());
            }
        }
    }
}

/// Intensity of text.
///
/// | Code | Description |
/// |------|-------------|
/// | `1`  | Bold        |
/// | `2`  | Dim         |
/// | `22` | Normal      |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intensity {
    /// Bold or bright text
    Bold,
    /// Dim or faint text
    Dim,
    /// Normal intensity
    Normal,
}

/// Underline state.
///
/// | Code | Description      |
/// |------|------------------|
/// | `4`  | Underline        |
/// | `21` | Double Underline |
/// | `24` | No Underline     |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Underline {
    /// Single underline
    Single,
    /// Double underline
    Double,
    /// No underline
    Disabled,
}

/// Blink state.
///
/// | Code | Description |
/// |------|-------------|
/// | `5`  | Blink       |
/// | `6`  | Rapid Blink |
/// | `25` | No Blink    |
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blink {
    /// Slow blink
    Slow,
    /// Rapid blink
    Rapid,
    /// No blink
    Off,
}

/// A set of SGR attributes applied together.
///
/// Every field is optional; `None` means the attribute is left as the
/// terminal currently has it. The default value carries no attributes at all
/// and is used as the "introduce nothing at this layer" marker — see
/// [`Style::is_plain`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    /// Intensity of text. See: [`Intensity`]
    pub intensity: Option<Intensity>,
    /// Whether this style is italic (`3`) or not (`23`).
    pub italic: Option<bool>,
    /// Whether this style is underlined. See: [`Underline`]
    pub underline: Option<Underline>,
    /// Whether this style is blinking. See: [`Blink`]
    pub blink: Option<Blink>,
    /// Whether foreground and background are swapped (`7`) or not (`27`).
    pub reverse: Option<bool>,
    /// Whether this style is hidden (`8`) or revealed (`28`).
    pub hidden: Option<bool>,
    /// Whether this style is struck through (`9`) or not (`29`).
    pub strike: Option<bool>,
    /// Foreground color (`30`-`37`, `90`-`97`, `38;5;n`, `38;2;r;g;b`)
    pub foreground: Option<Color>,
    /// Background color (`40`-`47`, `100`-`107`, `48;5;n`, `48;2;r;g;b`)
    pub background: Option<Color>,
}

impl Style {
    /// Returns `true` if this style carries no attributes at all.
    ///
    /// A plain style emits no escape sequence and, when supplied as a layer
    /// entry to the highlighter, introduces no range.
    pub fn is_plain(&self) -> bool {
        *self == Style::default()
    }

    /// Returns the ordered SGR parameter list for this style.
    ///
    /// The list is empty for a plain style. The order is fixed: attributes
    /// first (intensity, italic, underline, blink, reverse, hidden, strike),
    /// then foreground, then background.
    pub fn codes(&self) -> Vec<String> {
        let mut codes = Vec::new();

        // Intensity (Bold `1`, Dim `2`, Normal `22`)
        match self.intensity {
            Some(Intensity::Bold) => codes.push("1".to_string()),
            Some(Intensity::Dim) => codes.push("2".to_string()),
            Some(Intensity::Normal) => codes.push("22".to_string()),
            None => {}
        }

        // Italic (Enabled `3`, Disabled `23`)
        match self.italic {
            Some(true) => codes.push("3".to_string()),
            Some(false) => codes.push("23".to_string()),
            None => {}
        }

        // Underline (Single `4`, Double `21`, Disabled `24`)
        match self.underline {
            Some(Underline::Single) => codes.push("4".to_string()),
            Some(Underline::Double) => codes.push("21".to_string()),
            Some(Underline::Disabled) => codes.push("24".to_string()),
            None => {}
        }

        // Blink (Slow `5`, Rapid `6`, Off `25`)
        match self.blink {
            Some(Blink::Slow) => codes.push("5".to_string()),
            Some(Blink::Rapid) => codes.push("6".to_string()),
            Some(Blink::Off) => codes.push("25".to_string()),
            None => {}
        }

        // Reverse (Enabled `7`, Disabled `27`)
        match self.reverse {
            Some(true) => codes.push("7".to_string()),
            Some(false) => codes.push("27".to_string()),
            None => {}
        }

        // Hidden (Enabled `8`, Disabled `28`)
        match self.hidden {
            Some(true) => codes.push("8".to_string()),
            Some(false) => codes.push("28".to_string()),
            None => {}
        }

        // Strike (Enabled `9`, Disabled `29`)
        match self.strike {
            Some(true) => codes.push("9".to_string()),
            Some(false) => codes.push("29".to_string()),
            None => {}
        }

        if let Some(fg) = &self.foreground {
            fg.push_foreground(&mut codes);
        }

        if let Some(bg) = &self.background {
            bg.push_background(&mut codes);
        }

        codes
    }

    /// Writes this style's escape sequence to the given writer.
    ///
    /// A plain style writes nothing.
    pub fn write_str<W: std::fmt::Write>(&self, writer: &mut W) -> std::fmt::Result {
        let codes = self.codes();

        if !codes.is_empty() {
            write!(writer, "\x1b[{}m", codes.join(";"))?;
        }
        Ok(())
    }

    /// Writes the full-reset escape sequence (`\x1b[0m`) to the given writer.
    pub fn write_reset<W: std::fmt::Write>(writer: &mut W) -> std::fmt::Result {
        write!(writer, "\x1b[0m")
    }

    /// Replays a list of numeric SGR parameters onto this style.
    ///
    /// This is the inverse of [`Style::codes`], used when reconstructing the
    /// styling of input that already carries escape sequences. Parameter `0`
    /// resets everything, `39`/`49` clear the foreground/background, and the
    /// extended forms `38;5;n`, `48;5;n`, `38;2;r;g;b`, `48;2;r;g;b` are
    /// consumed with their arguments. Unrecognized parameters are ignored.
    pub fn apply_params(&mut self, params: &[u16]) {
        let mut i = 0;
        while i < params.len() {
            match params[i] {
                0 => *self = Style::default(),

                // Intensity
                1 => self.intensity = Some(Intensity::Bold),
                2 => self.intensity = Some(Intensity::Dim),
                22 => self.intensity = Some(Intensity::Normal),

                // Italic
                3 => self.italic = Some(true),
                23 => self.italic = Some(false),

                // Underline
                4 => self.underline = Some(Underline::Single),
                21 => self.underline = Some(Underline::Double),
                24 => self.underline = Some(Underline::Disabled),

                // Blink
                5 => self.blink = Some(Blink::Slow),
                6 => self.blink = Some(Blink::Rapid),
                25 => self.blink = Some(Blink::Off),

                // Reverse
                7 => self.reverse = Some(true),
                27 => self.reverse = Some(false),

                // Hidden
                8 => self.hidden = Some(true),
                28 => self.hidden = Some(false),

                // Strike
                9 => self.strike = Some(true),
                29 => self.strike = Some(false),

                // Foreground colors
                30 => self.foreground = Some(Color::Black),
                31 => self.foreground = Some(Color::Red),
                32 => self.foreground = Some(Color::Green),
                33 => self.foreground = Some(Color::Yellow),
                34 => self.foreground = Some(Color::Blue),
                35 => self.foreground = Some(Color::Purple),
                36 => self.foreground = Some(Color::Cyan),
                37 => self.foreground = Some(Color::White),
                39 => self.foreground = None,
                90 => self.foreground = Some(Color::BrightBlack),
                91 => self.foreground = Some(Color::BrightRed),
                92 => self.foreground = Some(Color::BrightGreen),
                93 => self.foreground = Some(Color::BrightYellow),
                94 => self.foreground = Some(Color::BrightBlue),
                95 => self.foreground = Some(Color::BrightPurple),
                96 => self.foreground = Some(Color::BrightCyan),
                97 => self.foreground = Some(Color::BrightWhite),

                // Background colors
                40 => self.background = Some(Color::Black),
                41 => self.background = Some(Color::Red),
                42 => self.background = Some(Color::Green),
                43 => self.background = Some(Color::Yellow),
                44 => self.background = Some(Color::Blue),
                45 => self.background = Some(Color::Purple),
                46 => self.background = Some(Color::Cyan),
                47 => self.background = Some(Color::White),
                49 => self.background = None,
                100 => self.background = Some(Color::BrightBlack),
                101 => self.background = Some(Color::BrightRed),
                102 => self.background = Some(Color::BrightGreen),
                103 => self.background = Some(Color::BrightYellow),
                104 => self.background = Some(Color::BrightBlue),
                105 => self.background = Some(Color::BrightPurple),
                106 => self.background = Some(Color::BrightCyan),
                107 => self.background = Some(Color::BrightWhite),

                // 256-color mode: 38;5;n or 48;5;n
                38 if i + 2 < params.len() && params[i + 1] == 5 => {
                    if let Ok(n) = u8::try_from(params[i + 2]) {
                        self.foreground = Some(Color::Fixed(n));
                    }
                    i += 2;
                }
                48 if i + 2 < params.len() && params[i + 1] == 5 => {
                    if let Ok(n) = u8::try_from(params[i + 2]) {
                        self.background = Some(Color::Fixed(n));
                    }
                    i += 2;
                }

                // RGB color mode: 38;2;r;g;b or 48;2;r;g;b
                38 if i + 4 < params.len() && params[i + 1] == 2 => {
                    if let (Ok(r), Ok(g), Ok(b)) = (
                        u8::try_from(params[i + 2]),
                        u8::try_from(params[i + 3]),
                        u8::try_from(params[i + 4]),
                    ) {
                        self.foreground = Some(Color::Rgb(r, g, b));
                    }
                    i += 4;
                }
                48 if i + 4 < params.len() && params[i + 1] == 2 => {
                    if let (Ok(r), Ok(g), Ok(b)) = (
                        u8::try_from(params[i + 2]),
                        u8::try_from(params[i + 3]),
                        u8::try_from(params[i + 4]),
                    ) {
                        self.background = Some(Color::Rgb(r, g, b));
                    }
                    i += 4;
                }

                // Ignore unknown parameters
                _ => {}
            }
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_style_has_no_codes() {
        let style = Style::default();
        assert!(style.is_plain());
        assert!(style.codes().is_empty());

        let mut output = String::new();
        style.write_str(&mut output).unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn test_codes_single_attribute() {
        let style = Style {
            foreground: Some(Color::Red),
            ..Default::default()
        };
        assert_eq!(style.codes(), vec!["31"]);
    }

    #[test]
    fn test_codes_combined_attributes() {
        let style = Style {
            intensity: Some(Intensity::Bold),
            underline: Some(Underline::Single),
            foreground: Some(Color::Red),
            background: Some(Color::Rgb(10, 20, 30)),
            ..Default::default()
        };

        let mut output = String::new();
        style.write_str(&mut output).unwrap();
        assert_eq!(output, "\x1b[1;4;31;48;2;10;20;30m");
    }

    #[test]
    fn test_codes_fixed_color() {
        let style = Style {
            foreground: Some(Color::Fixed(123)),
            ..Default::default()
        };
        assert_eq!(style.codes(), vec!["38", "5", "123"]);
    }

    #[test]
    fn test_write_reset() {
        let mut output = String::new();
        Style::write_reset(&mut output).unwrap();
        assert_eq!(output, "\x1b[0m");
    }

    #[test]
    fn test_apply_params_basic() {
        let mut style = Style::default();
        style.apply_params(&[1, 31]);
        assert_eq!(style.intensity, Some(Intensity::Bold));
        assert_eq!(style.foreground, Some(Color::Red));
    }

    #[test]
    fn test_apply_params_reset() {
        let mut style = Style {
            intensity: Some(Intensity::Bold),
            foreground: Some(Color::Red),
            ..Default::default()
        };
        style.apply_params(&[0]);
        assert!(style.is_plain());
    }

    #[test]
    fn test_apply_params_clear_colors() {
        let mut style = Style {
            foreground: Some(Color::Red),
            background: Some(Color::Yellow),
            ..Default::default()
        };
        style.apply_params(&[39]);
        assert_eq!(style.foreground, None);
        assert_eq!(style.background, Some(Color::Yellow));

        style.apply_params(&[49]);
        assert_eq!(style.background, None);
    }

    #[test]
    fn test_apply_params_extended_colors() {
        let mut style = Style::default();
        style.apply_params(&[38, 5, 200]);
        assert_eq!(style.foreground, Some(Color::Fixed(200)));

        style.apply_params(&[48, 2, 255, 128, 64]);
        assert_eq!(style.background, Some(Color::Rgb(255, 128, 64)));
    }

    #[test]
    fn test_apply_params_ignores_unknown() {
        let mut style = Style::default();
        style.apply_params(&[31, 999, 53]);
        assert_eq!(style.foreground, Some(Color::Red));
        assert_eq!(style.background, None);
    }

    #[test]
    fn test_codes_round_trip() {
        let style = Style {
            intensity: Some(Intensity::Dim),
            reverse: Some(true),
            foreground: Some(Color::BrightCyan),
            background: Some(Color::Black),
            ..Default::default()
        };

        let params: Vec<u16> = style
            .codes()
            .iter()
            .map(|code| code.parse().unwrap())
            .collect();

        let mut replayed = Style::default();
        replayed.apply_params(&params);
        assert_eq!(replayed, style);
    }
}
