// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 the galapagos-resolver contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A declarative grammar for the many human-authored coordinate
//! spellings found in museum ledgers and specimen labels: degree-minute-
//! second with a variety of unit marks, unmarked colon- or space-
//! separated triples, digit strings with the components merged together,
//! and plain decimal degrees.

use crate::error::Error;

peg::parser! {
    pub grammar coord() for str {
        rule ws() = [' ' | '\t']*
        rule ws_plus() = [' ' | '\t']+

        rule whole() -> &'input str = $(['0'..='9']+)
        rule decimal_part() -> &'input str = $(['.' | ','] ['0'..='9']+)

        rule num() -> f64
            = s:$("-"? (whole() decimal_part() / whole() / decimal_part())) {?
                s.replace(',', ".").parse::<f64>().map_err(|_| "number")
            }
            / "--" { 0.0 }

        rule deg_word() = ("d" / "D") ("e" / "E") ("g" / "G")
        rule degmark() = "\u{00ba}" / "\u{00b0}" / deg_word() / "d" / "D"
        rule minmark() = "'" / "\u{2019}" / "\u{2032}" / "`" / "m" / "M"
        rule secmark() = "\"" / "\u{201d}" / "''" / "'" / "s" / "S"

        rule dir_char() -> char
            = c:['n' | 'N' | 's' | 'S' | 'e' | 'E' | 'w' | 'W'] "."? { c.to_ascii_lowercase() }

        rule deg() -> f64 = n:num() ws() degmark() { n }
        rule min_part() -> f64 = n:num() ws() minmark() { n / 60.0 }
        rule sec_part() -> f64 = n:num() ws() secmark() { n / 3600.0 }

        rule degminsec_std() -> (f64, Option<char>)
            = v:(
                (d:deg() ws() m:min_part() ws() s:sec_part() { d + m + s })
                / (d:deg() ws() m:min_part() ws() n:num() { d + m + n / 3600.0 })
                / (d:deg() ws() m:min_part()? ws() s:sec_part()? { d + m.unwrap_or(0.0) + s.unwrap_or(0.0) })
                / (m:min_part() ws() s:sec_part()? { m + s.unwrap_or(0.0) })
                / sec_part()
                / (n:num() ws() m:min_part()? ws() s:sec_part()? { n + m.unwrap_or(0.0) + s.unwrap_or(0.0) })
              ) ws() d:dir_char()? { (v, d) }

        rule degminsec_pre() -> (f64, Option<char>)
            = d:dir_char() v:deg() ws() m:min_part()? { (v + m.unwrap_or(0.0), Some(d)) }

        rule sep() = ":" / ws()

        rule degminsec_unmarked() -> (f64, Option<char>)
            = n1:num() sep() n2:num()? sep() n3:num()? sep() d:dir_char() {
                (n1 + n2.unwrap_or(0.0) / 60.0 + n3.unwrap_or(0.0) / 3600.0, Some(d))
              }

        rule merged_digits() -> &'input str = $(['0'..='9' | '-']*<1,7>)

        rule degminsec_merged() -> (f64, Option<char>)
            = s:merged_digits() ws() d:dir_char() { (parse_merged(s), Some(d)) }

        rule ca_word() = ("c" / "C") ("a" / "A") "."?

        /// A single latitude or longitude: optional "ca." uncertainty
        /// prefix, then the first of the four forms (prefixed direction,
        /// merged digits, unmarked triple, or marked degree-minute-second)
        /// to parse.
        pub rule degminsec() -> (f64, Option<char>)
            = ca_word()? ws() v:(degminsec_pre() / degminsec_merged() / degminsec_unmarked() / degminsec_std()) { v }

        rule sep_latlon() = "," / "/" / ";" / ws_plus()

        rule plain_latlon() -> ((f64, Option<char>), (f64, Option<char>))
            = a:degminsec() ws() sep_latlon()? ws() b:degminsec() { (a, b) }

        rule enclosed_latlon() -> ((f64, Option<char>), (f64, Option<char>))
            = "(" v:plain_latlon() ")" { v }

        /// A latitude/longitude pair, optionally parenthesized.
        pub rule latlon() -> ((f64, Option<char>), (f64, Option<char>))
            = v:(enclosed_latlon() / plain_latlon()) ws() { v }
    }
}

fn int_or_dashes(s: &str) -> i64 {
    if !s.is_empty() && s.chars().all(|c| c == '-') {
        return 0;
    }
    s.parse().unwrap_or(0)
}

/// Splits a run of merged digits (e.g. `"0894000"`) into degree/minute/
/// second components by length: up to 3 digits is degrees only, up to 5
/// is degrees + 2-digit minutes, and 6 or 7 is degrees + 2-digit minutes
/// + 2-digit seconds. A substring of only dashes stands for zero.
fn parse_merged(s: &str) -> f64 {
    let (deg, min, sec) = if s.len() <= 3 {
        (s, "0", "0")
    } else if s.len() <= 5 {
        (&s[..s.len() - 2], &s[s.len() - 2..], "0")
    } else {
        (&s[..s.len() - 4], &s[s.len() - 4..s.len() - 2], &s[s.len() - 2..])
    };
    int_or_dashes(deg) as f64 + int_or_dashes(min) as f64 / 60.0 + int_or_dashes(sec) as f64 / 3600.0
}

/// Parses a single human-authored coordinate, validating its direction
/// letter (if any) against `acceptable_dirs` and its magnitude against
/// `max_abs`.
pub fn parse_human_coord(s: &str, acceptable_dirs: &[char], max_abs: f64) -> Result<f64, Error> {
    let (mut val, dir) = coord::degminsec(s)?;
    if let Some(d) = dir {
        if !acceptable_dirs.contains(&d) {
            return Err(Error::InvalidDirection { direction: d });
        }
        if val < 0.0 {
            return Err(Error::NegativeWithDirection { value: val, direction: d });
        }
        if d == 's' || d == 'w' {
            val = -val;
        }
    }
    if val > max_abs || val < -max_abs {
        return Err(Error::OutOfBounds { value: val, bound: max_abs });
    }
    Ok(val)
}

pub fn parse_human_lat(s: &str) -> Result<f64, Error> {
    parse_human_coord(s, &['n', 's'], 90.0)
}

pub fn parse_human_lon(s: &str) -> Result<f64, Error> {
    parse_human_coord(s, &['e', 'w'], 180.0)
}

/// Parses a latitude/longitude pair, swapping the two values if their
/// direction letters indicate they were given in the wrong order (e.g.
/// longitude first).
pub fn parse_human_latlon(s: &str) -> Result<(f64, f64), Error> {
    let ((mut lat, mut latdir), (mut lon, mut londir)) = coord::latlon(s)?;
    if matches!(latdir, Some('e') | Some('w')) && matches!(londir, Some('n') | Some('s')) {
        std::mem::swap(&mut lat, &mut lon);
        std::mem::swap(&mut latdir, &mut londir);
    }
    if let Some(d) = latdir {
        if d != 'n' && d != 's' {
            return Err(Error::InvalidDirection { direction: d });
        }
        if lat < 0.0 {
            return Err(Error::NegativeWithDirection { value: lat, direction: d });
        }
        if d == 's' {
            lat = -lat;
        }
    }
    if let Some(d) = londir {
        if d != 'e' && d != 'w' {
            return Err(Error::InvalidDirection { direction: d });
        }
        if lon < 0.0 {
            return Err(Error::NegativeWithDirection { value: lon, direction: d });
        }
        if d == 'w' {
            lon = -lon;
        }
    }
    if !(-90.0..=90.0).contains(&lat) {
        return Err(Error::OutOfBounds { value: lat, bound: 90.0 });
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(Error::OutOfBounds { value: lon, bound: 180.0 });
    }
    Ok((lat, lon))
}
