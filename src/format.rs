//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use std::fmt::{self, Write};

/// Capacity of formatted widget text.
pub const TEXT_BUF_LEN: usize = 1024;
/// Capacity of formatted tooltips.
pub const TOOLTIP_BUF_LEN: usize = 1024;
/// Capacity of formatted slider values.
pub const VALUE_BUF_LEN: usize = 64;

/// Decimal places a slider rounds to when its format has no precision.
pub const DEFAULT_PRECISION: usize = 3;
/// Largest precision honored by sliders.
pub const MAX_PRECISION: usize = 10;

struct BoundedWriter<'a> {
    buf: &'a mut String,
    cap: usize,
}

impl Write for BoundedWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            if self.buf.len() + ch.len_utf8() > self.cap {
                return Err(fmt::Error);
            }
            self.buf.push(ch);
        }
        Ok(())
    }
}

/// Formats `args` into at most `cap` bytes, cutting at a character boundary.
pub fn format_bounded(cap: usize, args: fmt::Arguments<'_>) -> String {
    let mut buf = String::new();
    // a full buffer is the only error source; the prefix is kept
    let _ = BoundedWriter { buf: &mut buf, cap }.write_fmt(args);
    buf
}

/// One `%[flags][width][.precision]f` conversion.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FloatSpec {
    /// `-` flag: pad on the right.
    pub left_align: bool,
    /// `0` flag: pad with zeros after the sign.
    pub zero_pad: bool,
    /// `+` flag: always print a sign.
    pub plus: bool,
    /// ` ` flag: space in front of non-negative values.
    pub space: bool,
    /// Minimum field width.
    pub width: usize,
    /// Digits after the decimal point; six when absent.
    pub precision: Option<usize>,
}

impl FloatSpec {
    /// Parses the text following a `%`; returns the spec and the bytes consumed.
    fn parse(s: &str) -> Option<(Self, usize)> {
        let bytes = s.as_bytes();
        let mut spec = FloatSpec::default();
        let mut i = 0;
        while let Some(&b) = bytes.get(i) {
            match b {
                b'-' => spec.left_align = true,
                b'0' => spec.zero_pad = true,
                b'+' => spec.plus = true,
                b' ' => spec.space = true,
                _ => break,
            }
            i += 1;
        }
        let (width, n) = leading_number(&s[i..]);
        spec.width = width;
        i += n;
        if bytes.get(i) == Some(&b'.') {
            let (precision, n) = leading_number(&s[i + 1..]);
            spec.precision = Some(precision);
            i += 1 + n;
        }
        match bytes.get(i) {
            Some(b'f') | Some(b'F') => Some((spec, i + 1)),
            _ => None,
        }
    }

    fn write(&self, out: &mut String, value: f32) {
        let precision = self.precision.unwrap_or(6);
        let digits = format!("{:.*}", precision, value.abs());
        let sign = if value.is_sign_negative() && digits.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
            "-"
        } else if self.plus {
            "+"
        } else if self.space {
            " "
        } else {
            ""
        };
        let len = sign.len() + digits.len();
        let pad = self.width.saturating_sub(len);
        if self.left_align {
            out.push_str(sign);
            out.push_str(&digits);
            out.extend(std::iter::repeat_n(' ', pad));
        } else if self.zero_pad {
            out.push_str(sign);
            out.extend(std::iter::repeat_n('0', pad));
            out.push_str(&digits);
        } else {
            out.extend(std::iter::repeat_n(' ', pad));
            out.push_str(sign);
            out.push_str(&digits);
        }
    }
}

fn leading_number(s: &str) -> (usize, usize) {
    let n = s.bytes().take_while(|b| b.is_ascii_digit()).count();
    (s[..n].parse().unwrap_or(0), n)
}

/// Renders `value` through a printf style format.
///
/// Only the first `%f` conversion consumes the value; `%%` prints a percent
/// sign and anything else is copied as is. The result is capped at
/// [`VALUE_BUF_LEN`] bytes.
pub fn format_value(format: &str, value: f32) -> String {
    let bytes = format.as_bytes();
    let mut out = String::new();
    let mut consumed = false;
    let mut last = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        out.push_str(&format[last..i]);
        if bytes.get(i + 1) == Some(&b'%') {
            out.push('%');
            i += 2;
        } else {
            match FloatSpec::parse(&format[i + 1..]) {
                Some((spec, n)) if !consumed => {
                    spec.write(&mut out, value);
                    consumed = true;
                    i += 1 + n;
                }
                _ => {
                    out.push('%');
                    i += 1;
                }
            }
        }
        last = i;
    }
    out.push_str(&format[last..]);
    format_bounded(VALUE_BUF_LEN, format_args!("{}", out))
}

/// Decimal places a slider snaps its value to.
///
/// Read from the text after the first `%`: width digits are skipped and the
/// number following a `.` is used, clamped to [`MAX_PRECISION`]. Formats
/// without a `.` use [`DEFAULT_PRECISION`].
pub fn decimal_precision(format: &str) -> usize {
    let Some(at) = format.find('%') else {
        return DEFAULT_PRECISION;
    };
    let rest = &format[at + 1..];
    let (_, width_len) = leading_number(rest);
    let rest = &rest[width_len..];
    match rest.strip_prefix('.') {
        Some(digits) => leading_number(digits).0.min(MAX_PRECISION),
        None => DEFAULT_PRECISION,
    }
}
