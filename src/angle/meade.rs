//! The angle notation of the Meade telescope command set:
//! an optionally signed value of degrees (or hours),
//! minutes and optional seconds, e.g. `+045*30:00` or `12:34:56`.

use lazy_static::lazy_static;
use regex::Regex;

use super::{dms::Dms, errors::ParseAngleError};

lazy_static! {
    static ref RE_MEADE: Regex = Regex::new(&parse_meade_re()).expect("Meade regex is valid");
}

/// Construct regular expression to parse the Meade representation of an angle
fn parse_meade_re() -> String {
    let (deg, min) = ("[*°:']", "[:']");

    format!(
        r##"(?x)                              # enables verbose mode (to allow these comments)
        ^                                           # match the whole line from the start
        (?P<sign>[-+])?                             # optional sign
        (?P<deg>\d{{1,3}})                          # mandatory degree VALUE (0..=999)
        (?:                                         # minutes and seconds group
            {deg}\x20?                                  # degree separator optionally followed by the space
            (?P<min>\d{{2}})                            # minutes VALUE (00..=99) - requires more validation!
            (?:                                         # seconds group
                {min}\x20?                                  # minute separator optionally followed by the space
                (?P<sec>\d{{2}})                            # seconds VALUE (00..=99) - requires more validation!
                "?                                          # optional arcsecond sign
            )?                                          # seconds are optional
        )?                                          # minutes and seconds are optional
        $                                           # match the whole line till the end
        "##
    )
}

/// Split the Meade angle into the sign, degrees, minutes and seconds.
/// The ranges of minutes and seconds are not checked here.
pub(super) fn parse_meade_parts(s: &str) -> Result<(bool, u32, u8, u8), ParseAngleError> {
    let capture = RE_MEADE
        .captures(s)
        .ok_or(ParseAngleError::MeadeNotation)?;

    let negative = capture.name("sign").map(|m| m.as_str()) == Some("-");
    let degrees = capture
        .name("deg")
        .ok_or(ParseAngleError::MeadeNotation)?
        .as_str()
        .parse()?;
    let minutes = capture
        .name("min")
        .map_or(Ok(0), |m| m.as_str().parse())?;
    let seconds = capture
        .name("sec")
        .map_or(Ok(0), |m| m.as_str().parse())?;

    Ok((negative, degrees, minutes, seconds))
}

/// Substitute the placeholders of the template with the parts of the angle
pub(super) fn format_template(template: &str, dms: &Dms) -> String {
    let sign = if dms.negative { '-' } else { '+' };

    let mut res = String::with_capacity(template.len() + 4);
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        res.push_str(&rest[..start]);
        let tail = &rest[start..];

        if let Some(end) = tail.find('}') {
            match &tail[1..end] {
                "+" => res.push(sign),
                "-" => {
                    if dms.negative {
                        res.push(sign);
                    }
                }
                "d" => res.push_str(&format!("{:02}", dms.degrees)),
                "D" => res.push_str(&format!("{:03}", dms.degrees)),
                "m" => res.push_str(&format!("{:02}", dms.minutes)),
                "s" => res.push_str(&format!("{:02}", dms.seconds)),
                _ => res.push_str(&tail[..=end]),
            }
            rest = &tail[end + 1..];
        } else {
            // unclosed placeholder
            rest = tail;
            break;
        }
    }

    res.push_str(rest);
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dms(negative: bool, degrees: u64, minutes: u8, seconds: u8) -> Dms {
        Dms {
            negative,
            degrees,
            minutes,
            seconds,
        }
    }

    #[test]
    fn signed_full() {
        assert_eq!(parse_meade_parts("+045*30:00").unwrap(), (false, 45, 30, 0));
        assert_eq!(parse_meade_parts("-045*30:15").unwrap(), (true, 45, 30, 15));
    }

    #[test]
    fn signed_no_seconds() {
        assert_eq!(parse_meade_parts("-122*18").unwrap(), (true, 122, 18, 0));
    }

    #[test]
    fn unsigned_three_digits() {
        assert_eq!(parse_meade_parts("237*41").unwrap(), (false, 237, 41, 0));
    }

    #[test]
    fn hours_notation() {
        assert_eq!(parse_meade_parts("12:34:56").unwrap(), (false, 12, 34, 56));
    }

    #[test]
    fn unicode_and_quotes() {
        assert_eq!(parse_meade_parts("45°30'15\"").unwrap(), (false, 45, 30, 15));
    }

    #[test]
    fn spaces_after_separators() {
        assert_eq!(parse_meade_parts("-45* 30: 15").unwrap(), (true, 45, 30, 15));
    }

    #[test]
    fn degrees_only() {
        assert_eq!(parse_meade_parts("+7").unwrap(), (false, 7, 0, 0));
    }

    #[test]
    fn out_of_range_minutes_are_parsed() {
        assert_eq!(parse_meade_parts("10*75").unwrap(), (false, 10, 75, 0));
    }

    #[test]
    #[should_panic(expected = "MeadeNotation")]
    fn empty() {
        let _p = parse_meade_parts("").unwrap();
    }

    #[test]
    #[should_panic(expected = "MeadeNotation")]
    fn double_sign() {
        let _p = parse_meade_parts("--45*30").unwrap();
    }

    #[test]
    #[should_panic(expected = "MeadeNotation")]
    fn single_digit_minutes() {
        let _p = parse_meade_parts("45*3").unwrap();
    }

    #[test]
    #[should_panic(expected = "MeadeNotation")]
    fn too_many_degree_digits() {
        let _p = parse_meade_parts("1045*30").unwrap();
    }

    #[test]
    #[should_panic(expected = "MeadeNotation")]
    fn garbage() {
        let _p = parse_meade_parts("E045*30").unwrap();
    }

    #[test]
    fn template_meade() {
        assert_eq!(
            format_template("{+}{D}*{m}", &dms(true, 134, 30, 12)),
            "-134*30"
        );
        assert_eq!(format_template("{+}{D}*{m}", &dms(false, 45, 3, 0)), "+045*03");
    }

    #[test]
    fn template_optional_sign() {
        assert_eq!(
            format_template("{-}{d}:{m}:{s}", &dms(false, 5, 6, 7)),
            "05:06:07"
        );
        assert_eq!(
            format_template("{-}{d}:{m}:{s}", &dms(true, 5, 6, 7)),
            "-05:06:07"
        );
    }

    #[test]
    fn template_wide_degrees() {
        assert_eq!(format_template("{d}", &dms(false, 1234, 0, 0)), "1234");
    }

    #[test]
    fn template_unknown_placeholder() {
        assert_eq!(
            format_template("{x}{d}{unclosed", &dms(false, 1, 0, 0)),
            "{x}01{unclosed"
        );
    }

    #[test]
    fn template_plain_text() {
        assert_eq!(format_template("no placeholders", &dms(true, 1, 2, 3)), "no placeholders");
    }
}
