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

//! Coordinate-parsing fixtures covering the heterogeneous spellings
//! museum ledgers and specimen labels actually use: marked
//! degree-minute-second, unmarked colon/space triples, merged digit
//! runs, comma decimals, a "ca." uncertainty prefix, and swapped pair
//! order recovered from direction letters.

use galapagos_resolver::grammar::{parse_human_lat, parse_human_latlon, parse_human_lon};

const TOLERANCE: f64 = 1e-6;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

#[test]
fn latlon_pair_fixtures() {
    let fixtures: &[(&str, (f64, f64))] = &[
        ("s1\u{b0}39\u{2032} w89\u{b0}20\u{2032}", (-1.65, -89.33333333333333)),
        ("13' 45\" s, 91\u{b0} 48' 30\" w", (-0.22916666666666669, -91.80833333333334)),
        ("0\u{b0} 44' 29.16'' s 90\u{b0} 18' 27.56'' w", (-0.7414333333333333, -90.30765555555556)),
        ("0\u{b0} 44' 46.08'' s 90\u{b0} 17' 59'' w", (-0.7461333333333333, -90.29972222222221)),
        ("0\u{b0} 58' 40'' s 91\u{b0} 26' 3.47'' w", (-0.9777777777777777, -91.43429722222223)),
        ("0,6262\u{b0}s 90,3863\u{b0}w", (-0.6262, -90.3863)),
        ("0,6377\u{b0}s 90,3829\u{b0}w", (-0.6377, -90.3829)),
        ("0,693463\u{b0}s 90,325073\u{b0}w", (-0.693463, -90.325073)),
        ("0,2743\u{b0}s 90,7148\u{b0}w", (-0.2743, -90.7148)),
        ("-.81639/-90.05", (-0.81639, -90.05)),
        ("-1.23306/-90.44972", (-1.23306, -90.44972)),
        ("-.75/-90.28306", (-0.75, -90.28306)),
        ("-1.25218/-90.46932", (-1.25218, -90.46932)),
        ("0/-90", (0.0, -90.0)),
        ("-.4/-90.69972", (-0.4, -90.69972)),
        (".58306/-90.73306", (0.58306, -90.73306)),
        ("0/-90.5", (0.0, -90.5)),
        ("-0.750714/-90.306177", (-0.750714, -90.306177)),
        ("-0.7594900000, -90.2786100000", (-0.75949, -90.27861)),
        ("012700s;0894000w", (-1.45, -89.66666666666667)),
        ("090230s;0910600w", (-9.041666666666666, -91.1)),
        ("0 11.83s 91 47.33w", (-0.19716666666666666, -91.78883333333333)),
        ("0 13s 91 45w", (-0.21666666666666667, -91.75)),
        ("0 13.25s 91 44.50w", (-0.22083333333333333, -91.74166666666666)),
        ("0,5\u{b0}s 91\u{b0}w", (-0.5, -91.0)),
        ("9' s, 91\u{b0} 45' 30\" w", (-0.15, -91.75833333333334)),
        ("14' s, 91\u{b0} 49' 30\" w", (-0.23333333333333334, -91.825)),
        ("13' 30\" s, 91\u{b0} 48' 15\" w", (-0.225, -91.80416666666666)),
        ("01\u{b0} 21.5' s 89\u{b0} 38.7' w", (-1.3583333333333334, -89.645)),
        ("0,6451\u{b0}s 90,3454\u{b0}w", (-0.6451, -90.3454)),
        ("0,6437\u{b0}s 90,3244\u{b0}w", (-0.6437, -90.3244)),
        ("00\u{b0} 37' 05''  s  90\u{b0} 24' 19''  w", (-0.6180555555555556, -90.40527777777778)),
        ("(1\u{b0} 30' 29.88\" n, 89\u{b0} 30' e)", (1.5083, 89.5)),
        ("0 13s 91 47.50w", (-0.21666666666666667, -91.79166666666667)),
        ("0\u{b0} 29' 20\" s 90\u{b0} 17' 40\" w", (-0.4888888888888889, -90.29444444444444)),
        ("0\u{b0} 45' 06\" s 90\u{b0} 15' 38\" w", (-0.7516666666666667, -90.26055555555556)),
        ("0\u{b0} 25' s 90\u{b0} 42' w", (-0.4166666666666667, -90.7)),
        ("0 13' s., 90 42' w.", (-0.21666666666666667, -90.7)),
        ("0 23' 30\" s., 90 17' 40\" w.", (-0.3916666666666667, -90.29444444444444)),
        ("0 29' 20\" s., 90 17' 40\" w.", (-0.4888888888888889, -90.29444444444444)),
        ("003300n;0904500w", (0.55, -90.75)),
        ("002000n;0903000w", (0.3333333333333333, -90.5)),
        ("1 40' s,  91 20' w", (-1.6666666666666665, -91.33333333333333)),
        ("0\u{b0} 35' 50\" s 90\u{b0} 39' 15\" w", (-0.5972222222222222, -90.65416666666667)),
        ("0\u{b0} 35' 50\" s, 90\u{b0} 39' 15\" w", (-0.5972222222222222, -90.65416666666667)),
        ("0d 0m 0s s/90d 30m 0s w", (-0.0, -90.5)),
        ("0d 30m 0s s/90d 30m 0s w", (-0.5, -90.5)),
        ("91\u{b0} 47' 30\"w, 0\u{b0} 13' 0\"s", (-0.21666666666666667, -91.79166666666667)),
        ("0\u{b0} 12' 35\" s 91\u{b0} 47' 5\" w", (-0.20972222222222223, -91.78472222222221)),
        ("02 deg 46'n, 91 deg 46'w", (2.7666666666666666, -91.76666666666667)),
        ("0.6667\u{b0} s,  90.25\u{b0} w", (-0.6667, -90.25)),
        ("11' s,  90\u{b0} 31' w", (-0.18333333333333332, -90.51666666666667)),
        ("42' s,  90\u{b0} 15' w", (-0.7, -90.25)),
        (".614162/-90.670756", (0.614162, -90.670756)),
        ("1\u{b0}17'51''s 90\u{b0}26'3''w", (-1.2974999999999999, -90.43416666666667)),
        ("00\u{b0}30's 91\u{b0}04'w", (-0.5, -91.06666666666666)),
        ("90\u{b0} 24' 19'  w 00\u{b0} 37' 05'  s", (-0.6180555555555556, -90.40527777777778)),
        ("0.74\u{b0}s, 90.31\u{b0}w", (-0.74, -90.31)),
    ];

    for (input, (expected_lat, expected_lon)) in fixtures {
        let (lat, lon) = parse_human_latlon(input)
            .unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"));
        assert!(close(lat, *expected_lat), "{input:?}: lat {lat} != {expected_lat}");
        assert!(close(lon, *expected_lon), "{input:?}: lon {lon} != {expected_lon}");
    }
}

#[test]
fn single_longitude_fixtures() {
    let fixtures: &[(&str, f64)] = &[
        ("90 13 18 w", -90.22166666666666),
        ("09023 w", -90.38333333333334),
        ("91 26'50\"w", -91.44722222222222),
        ("08757 w", -87.95),
        ("90 34.9700 w", -90.58283333333333),
        ("0913848w", -91.64666666666668),
        ("089 42 w", -89.7),
        ("90 20 17.5 w", -90.33819444444444),
        ("0912255w", -91.38194444444444),
        ("0894530w", -89.75833333333334),
        ("09158--w", -91.96666666666667),
        ("092 w", -92.0),
        ("89 43.5 w", -89.725),
        ("89 38.7'w", -89.645),
        ("-89.5", -89.5),
        ("089 57 -- w", -89.95),
        ("-90.26667", -90.26667),
        ("090 26 18.00 w", -90.43833333333333),
        ("89\u{b0}30'e", 89.5),
        ("88\u{b0} 38' 36'' w", -88.64333333333335),
        ("90\u{b0} 17' w", -90.28333333333333),
        ("90\u{b0} 19' 0 w", -90.31666666666666),
        ("91\u{b0}1'w", -91.01666666666667),
        ("091   w", -91.0),
        ("91\u{b0}0'w", -91.0),
        ("-91.992074\u{b0}", -91.992074),
        ("091 24 -- w", -91.4),
        ("090 16 15.60 w", -90.271),
        ("90\u{b0}29`w", -90.48333333333333),
        ("89\u{b0}57\u{2019}13\u{201d}w", -89.95361111111112),
        ("w89\u{b0}20\u{2032}", -89.33333333333333),
        ("90:02:13 w", -90.03694444444444),
        ("ca. 90 18 58 w", -90.31611111111111),
    ];

    for (input, expected) in fixtures {
        let lon = parse_human_lon(input).unwrap_or_else(|e| panic!("failed to parse {input:?}: {e}"));
        assert!(close(lon, *expected), "{input:?}: {lon} != {expected}");
    }
}

#[test]
fn rejects_latitude_direction_on_a_longitude_field() {
    assert!(parse_human_lon("10n").is_err());
    assert!(parse_human_lat("10e").is_err());
}

#[test]
fn rejects_coordinates_outside_their_axis_bound() {
    assert!(parse_human_lat("95n").is_err());
    assert!(parse_human_lon("185w").is_err());
}
