/// Renderer configuration and the startup config file parser
use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::{char, hex_digit1, space0},
    combinator::{all_consuming, map_res},
    number::complete::recognize_float,
    sequence::{delimited, preceded},
    IResult,
};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::clock::AngularMotion;
use crate::error::ConfigError;
use crate::geometry::edge_sampling;

/// 24-bit RGB color packed as `0xRRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x000000);
    pub const WHITE: Color = Color(0xffffff);

    pub fn rgb(self) -> (u8, u8, u8) {
        let [_, r, g, b] = self.0.to_be_bytes();
        (r, g, b)
    }
}

/// Everything the frame loop needs, fixed once the loop starts
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub background: Color,
    pub foreground: Color,
    /// Side of the square drawn for each point
    pub point_size: u32,
    pub edge_length: i32,
    pub total_points: usize,
    pub motion: AngularMotion,
    pub frame_delay: Duration,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 600,
            background: Color::BLACK,
            foreground: Color::WHITE,
            point_size: 5,
            edge_length: 300,
            total_points: 1200,
            motion: AngularMotion::default(),
            frame_delay: Duration::from_millis(10),
        }
    }
}

impl RenderConfig {
    /// Check every startup precondition
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidConfiguration(format!(
                "surface must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > i32::MAX as u32 || self.height > i32::MAX as u32 {
            return Err(ConfigError::InvalidConfiguration(
                "surface dimensions exceed the coordinate range".to_string(),
            ));
        }
        if self.point_size == 0 {
            return Err(ConfigError::InvalidConfiguration(
                "point size must be positive".to_string(),
            ));
        }
        let motion = &self.motion;
        let factors = [
            motion.yaw_step,
            motion.pitch_step,
            motion.roll_step,
            motion.yaw_speed,
            motion.pitch_speed,
            motion.roll_speed,
        ];
        if factors.iter().any(|factor| !factor.is_finite()) {
            return Err(ConfigError::InvalidConfiguration(
                "angular steps and speeds must be finite".to_string(),
            ));
        }

        edge_sampling(self.edge_length, self.total_points)?;
        Ok(())
    }

    /// Read a config file and apply it on top of the defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| ConfigError::Read(format!("{}: {}", path.display(), e)))?;
        Self::from_str_overrides(&text)
    }

    /// Apply `key = value` lines on top of the defaults
    pub fn from_str_overrides(text: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let content = raw.split('#').next().unwrap_or("").trim();
            if content.is_empty() {
                continue;
            }

            let (_, (key, value)) = all_consuming(parse_entry)(content).map_err(|_| {
                ConfigError::Parse {
                    line,
                    message: format!("expected `key = value`, found '{content}'"),
                }
            })?;
            config.apply(line, key, value)?;
            log::debug!("config line {}: {} = {:?}", line, key, value);
        }
        Ok(config)
    }

    fn apply(&mut self, line: usize, key: &str, value: Value) -> Result<(), ConfigError> {
        match key {
            "width" => self.width = value.integer(line, key)?,
            "height" => self.height = value.integer(line, key)?,
            "background" => self.background = Color(value.integer(line, key)?),
            "foreground" => self.foreground = Color(value.integer(line, key)?),
            "point_size" => self.point_size = value.integer(line, key)?,
            "edge_length" => self.edge_length = value.integer(line, key)?,
            "total_points" => self.total_points = value.integer(line, key)?,
            "yaw_step" => self.motion.yaw_step = value.real(),
            "pitch_step" => self.motion.pitch_step = value.real(),
            "roll_step" => self.motion.roll_step = value.real(),
            "yaw_speed" => self.motion.yaw_speed = value.real(),
            "pitch_speed" => self.motion.pitch_speed = value.real(),
            "roll_speed" => self.motion.roll_speed = value.real(),
            "frame_delay_ms" => {
                self.frame_delay = Duration::from_millis(value.integer(line, key)?)
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    line,
                    key: key.to_string(),
                })
            }
        }
        Ok(())
    }
}

/// A parsed config value
#[derive(Debug, Clone, Copy, PartialEq)]
enum Value {
    Integer(i64),
    Real(f64),
}

impl Value {
    fn integer<T: TryFrom<i64>>(self, line: usize, key: &str) -> Result<T, ConfigError> {
        let out_of_range = || ConfigError::Parse {
            line,
            message: format!("value for '{key}' is out of range"),
        };
        match self {
            Value::Integer(n) => T::try_from(n).map_err(|_| out_of_range()),
            Value::Real(_) => Err(ConfigError::Parse {
                line,
                message: format!("'{key}' expects an integer"),
            }),
        }
    }

    fn real(self) -> f64 {
        match self {
            Value::Integer(n) => n as f64,
            Value::Real(x) => x,
        }
    }
}

fn parse_entry(input: &str) -> IResult<&str, (&str, Value)> {
    let (input, key) = preceded(space0, take_while1(is_key_char))(input)?;
    let (input, _) = delimited(space0, char('='), space0)(input)?;
    let (input, value) = parse_value(input)?;
    let (input, _) = space0(input)?;
    Ok((input, (key, value)))
}

fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn parse_value(input: &str) -> IResult<&str, Value> {
    alt((parse_hex, parse_number))(input)
}

fn parse_hex(input: &str) -> IResult<&str, Value> {
    map_res(preceded(tag_no_case("0x"), hex_digit1), |digits: &str| {
        i64::from_str_radix(digits, 16).map(Value::Integer)
    })(input)
}

fn parse_number(input: &str) -> IResult<&str, Value> {
    map_res(recognize_float, |text: &str| {
        if text.contains(|c: char| matches!(c, '.' | 'e' | 'E')) {
            text.parse::<f64>().map(Value::Real).map_err(|_| ())
        } else {
            text.parse::<i64>().map(Value::Integer).map_err(|_| ())
        }
    })(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = RenderConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width, 900);
        assert_eq!(config.total_points, 1200);
        assert_eq!(config.frame_delay, Duration::from_millis(10));
    }

    #[test]
    fn test_color_channels() {
        assert_eq!(Color(0x12ab34).rgb(), (0x12, 0xab, 0x34));
        assert_eq!(Color::WHITE.rgb(), (255, 255, 255));
    }

    #[test]
    fn test_parse_overrides() {
        let text = "\
# spinning cube
width = 640
height=480
foreground = 0x00FF7f   # teal-ish

yaw_step = 0.02
roll_speed = 3
frame_delay_ms = 16
";
        let config = RenderConfig::from_str_overrides(text).unwrap();
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 480);
        assert_eq!(config.foreground, Color(0x00ff7f));
        assert_eq!(config.background, Color::BLACK);
        assert_eq!(config.motion.yaw_step, 0.02);
        assert_eq!(config.motion.roll_speed, 3.0);
        assert_eq!(config.motion.pitch_step, 0.01);
        assert_eq!(config.frame_delay, Duration::from_millis(16));
    }

    #[test]
    fn test_negative_and_exponent_values() {
        let config = RenderConfig::from_str_overrides("pitch_step = -1.5e-2").unwrap();
        assert_eq!(config.motion.pitch_step, -0.015);
    }

    #[test]
    fn test_unknown_key() {
        let err = RenderConfig::from_str_overrides("width = 10\ncolour = 0xffffff").unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownKey {
                line: 2,
                key: "colour".to_string()
            }
        );
    }

    #[test]
    fn test_malformed_line() {
        let err = RenderConfig::from_str_overrides("\n\nwidth 900").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { line: 3, .. }));

        let err = RenderConfig::from_str_overrides("width = 900 px").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_wrong_value_kind() {
        let err = RenderConfig::from_str_overrides("total_points = 1200.5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { line: 1, .. }));

        let err = RenderConfig::from_str_overrides("width = -5").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_validate_rejects() {
        let invalid = [
            RenderConfig {
                total_points: 1000,
                ..RenderConfig::default()
            },
            RenderConfig {
                edge_length: 0,
                ..RenderConfig::default()
            },
            RenderConfig {
                width: 0,
                ..RenderConfig::default()
            },
            RenderConfig {
                point_size: 0,
                ..RenderConfig::default()
            },
            RenderConfig {
                motion: AngularMotion::uniform(f64::NAN),
                ..RenderConfig::default()
            },
        ];
        for config in invalid {
            assert!(matches!(
                config.validate(),
                Err(ConfigError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = RenderConfig::load("/nonexistent/cube.conf").unwrap_err();
        assert!(matches!(err, ConfigError::Read(_)));
    }
}
