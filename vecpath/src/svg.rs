use crate::error::{ParseError, ParseErrorKind};
use crate::geometry::limits;
use crate::geometry::math::Point;
use crate::model::{PathSegment, VectorPath, WindingRule};

pub fn path_to_svg_impl(path: &VectorPath) -> String {
    let mut tokens: Vec<String> = Vec::with_capacity(path.segments.len());
    for seg in &path.segments {
        tokens.push(match *seg {
            PathSegment::MoveTo { to } => format!("M {} {}", to.x, to.y),
            PathSegment::LineTo { to } => format!("L {} {}", to.x, to.y),
            PathSegment::CubicTo { ctrl1, ctrl2, to } => format!(
                "C {} {} {} {} {} {}",
                ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
            ),
            PathSegment::QuadTo { ctrl, to } => format!("Q {} {} {} {}", ctrl.x, ctrl.y, to.x, to.y),
            PathSegment::ArcTo { rx, ry, x_axis_rotation, large_arc, sweep, to } => format!(
                "A {} {} {} {} {} {} {}",
                rx,
                ry,
                x_axis_rotation,
                large_arc as u8,
                sweep as u8,
                to.x,
                to.y
            ),
            PathSegment::Close => "Z".to_string(),
        });
    }
    tokens.join(" ")
}

pub fn svg_to_path_impl(d: &str) -> Result<VectorPath, ParseError> {
    let segments = parse_segments(d).map_err(|e| {
        log::warn!("rejecting path data: {}", e);
        e
    })?;
    let closed = matches!(segments.last(), Some(PathSegment::Close));
    Ok(VectorPath::build(segments, closed, WindingRule::NonZero))
}

struct Scanner<'a> {
    src: &'a str,
    bytes: &'a [u8],
    i: usize,
}

impl<'a> Scanner<'a> {
    fn skip_ws(&mut self) {
        while self.i < self.bytes.len() {
            let c = self.bytes[self.i];
            if c == b' ' || c == b'\n' || c == b'\t' || c == b'\r' || c == b',' {
                self.i += 1;
            } else {
                break;
            }
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.i).copied()
    }

    /// Text from `at` up to the next separator, for error reports.
    fn token_at(&self, at: usize) -> &'a str {
        let mut end = at;
        while end < self.bytes.len() && !matches!(self.bytes[end], b' ' | b'\n' | b'\t' | b'\r' | b',') {
            end += 1;
        }
        self.src.get(at..end).unwrap_or("")
    }

    fn eat_digits(&mut self) -> bool {
        let start = self.i;
        while self.i < self.bytes.len() && self.bytes[self.i].is_ascii_digit() {
            self.i += 1;
        }
        self.i > start
    }

    /// One number in SVG grammar: sign, digits, fraction, exponent.
    fn number(&mut self, cmd: char, cmd_offset: usize) -> Result<f64, ParseError> {
        self.skip_ws();
        let start = self.i;
        match self.peek() {
            None => {
                return Err(ParseError::new(ParseErrorKind::MissingArguments, cmd.to_string(), cmd_offset));
            }
            Some(c) if c.is_ascii_alphabetic() => {
                return Err(ParseError::new(ParseErrorKind::MissingArguments, self.token_at(start), start));
            }
            _ => {}
        }
        if matches!(self.peek(), Some(b'+') | Some(b'-')) {
            self.i += 1;
        }
        let int_digits = self.eat_digits();
        let mut frac_digits = false;
        if self.peek() == Some(b'.') {
            self.i += 1;
            frac_digits = self.eat_digits();
        }
        if !int_digits && !frac_digits {
            return Err(ParseError::new(ParseErrorKind::InvalidNumber, self.token_at(start), start));
        }
        if matches!(self.peek(), Some(b'e') | Some(b'E')) {
            let mark = self.i;
            self.i += 1;
            if matches!(self.peek(), Some(b'+') | Some(b'-')) {
                self.i += 1;
            }
            if !self.eat_digits() {
                // Not an exponent after all
                self.i = mark;
            }
        }
        let text = &self.src[start..self.i];
        let v: f64 = text
            .parse()
            .map_err(|_| ParseError::new(ParseErrorKind::InvalidNumber, text, start))?;
        if !limits::in_coord_bounds(v) {
            return Err(ParseError::new(ParseErrorKind::OutOfBounds, text, start));
        }
        Ok(v)
    }

    fn point(&mut self, cmd: char, cmd_offset: usize) -> Result<Point, ParseError> {
        let x = self.number(cmd, cmd_offset)?;
        let y = self.number(cmd, cmd_offset)?;
        Ok(Point::new(x, y))
    }

    fn flag(&mut self, cmd: char, cmd_offset: usize) -> Result<bool, ParseError> {
        self.skip_ws();
        let at = self.i;
        let v = self.number(cmd, cmd_offset)?;
        if v == 0.0 {
            Ok(false)
        } else if v == 1.0 {
            Ok(true)
        } else {
            Err(ParseError::new(ParseErrorKind::InvalidNumber, self.token_at(at), at))
        }
    }
}

fn parse_segments(d: &str) -> Result<Vec<PathSegment>, ParseError> {
    if d.len() > limits::MAX_SVG_LEN {
        return Err(ParseError::new(ParseErrorKind::TooLong, format!("{} bytes", d.len()), 0));
    }
    let mut s = Scanner { src: d, bytes: d.as_bytes(), i: 0 };
    let mut segments: Vec<PathSegment> = Vec::new();
    let mut last_cmd: Option<(u8, usize)> = None;
    let mut commands = 0usize;

    loop {
        s.skip_ws();
        let Some(c) = s.peek() else { break };
        let at = s.i;

        let (cmd, cmd_offset) = if c.is_ascii_alphabetic() {
            match c {
                b'M' | b'L' | b'C' | b'Q' | b'A' | b'Z' => {
                    s.i += 1;
                    (c, at)
                }
                b'm' | b'l' | b'c' | b'q' | b'a' | b'z' | b'h' | b'v' | b's' | b't' => {
                    return Err(ParseError::new(ParseErrorKind::RelativeCommand, (c as char).to_string(), at));
                }
                _ => {
                    return Err(ParseError::new(ParseErrorKind::UnknownCommand, s.token_at(at), at));
                }
            }
        } else {
            // Implicit repetition of the previous command
            match last_cmd {
                None => return Err(ParseError::new(ParseErrorKind::MissingMoveTo, s.token_at(at), at)),
                Some((b'Z', _)) => {
                    return Err(ParseError::new(ParseErrorKind::UnknownCommand, s.token_at(at), at));
                }
                Some((b'M', off)) => (b'L', off),
                Some(prev) => prev,
            }
        };

        if segments.is_empty() && cmd != b'M' {
            return Err(ParseError::new(ParseErrorKind::MissingMoveTo, (cmd as char).to_string(), cmd_offset));
        }

        commands += 1;
        if commands > limits::MAX_SVG_COMMANDS {
            return Err(ParseError::new(ParseErrorKind::TooManyCommands, (cmd as char).to_string(), cmd_offset));
        }

        let name = cmd as char;
        let seg = match cmd {
            b'M' => PathSegment::MoveTo { to: s.point(name, cmd_offset)? },
            b'L' => PathSegment::LineTo { to: s.point(name, cmd_offset)? },
            b'C' => PathSegment::CubicTo {
                ctrl1: s.point(name, cmd_offset)?,
                ctrl2: s.point(name, cmd_offset)?,
                to: s.point(name, cmd_offset)?,
            },
            b'Q' => PathSegment::QuadTo {
                ctrl: s.point(name, cmd_offset)?,
                to: s.point(name, cmd_offset)?,
            },
            b'A' => PathSegment::ArcTo {
                rx: s.number(name, cmd_offset)?,
                ry: s.number(name, cmd_offset)?,
                x_axis_rotation: s.number(name, cmd_offset)?,
                large_arc: s.flag(name, cmd_offset)?,
                sweep: s.flag(name, cmd_offset)?,
                to: s.point(name, cmd_offset)?,
            },
            _ => PathSegment::Close,
        };
        segments.push(seg);
        last_cmd = Some((cmd, cmd_offset));
    }
    Ok(segments)
}
