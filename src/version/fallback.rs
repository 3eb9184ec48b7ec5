// src/version/fallback.rs

//! Port of libalpm's `alpm_pkg_vercmp`, used when spacman is built
//! without the `alpm` feature.

use std::cmp::Ordering;

/// `[epoch:]version[-release]` split into borrowed parts
struct Evr<'a> {
    epoch: &'a str,
    version: &'a str,
    release: Option<&'a str>,
}

impl<'a> Evr<'a> {
    /// An empty or missing epoch is `0`; the release follows the last `-`
    fn parse(s: &'a str) -> Self {
        let digits = s.bytes().take_while(u8::is_ascii_digit).count();
        let (epoch, rest) = match s[digits..].strip_prefix(':') {
            Some(rest) if digits == 0 => ("0", rest),
            Some(rest) => (&s[..digits], rest),
            None => ("0", s),
        };

        let (version, release) = match rest.rfind('-') {
            Some(pos) => (&rest[..pos], Some(&rest[pos + 1..])),
            None => (rest, None),
        };

        Self {
            epoch,
            version,
            release,
        }
    }
}

pub(super) fn vercmp(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let (a, b) = (Evr::parse(a), Evr::parse(b));
    rpmvercmp(a.epoch, b.epoch)
        .then_with(|| rpmvercmp(a.version, b.version))
        .then_with(|| match (a.release, b.release) {
            // Releases only count when both sides carry one
            (Some(ra), Some(rb)) => rpmvercmp(ra, rb),
            _ => Ordering::Equal,
        })
}

/// Segment-wise comparison of a single version component
///
/// Runs of digits compare numerically, runs of letters compare
/// lexicographically, and a numeric run beats an alphabetic one. When one
/// side runs out, the longer side wins unless its remainder starts with a
/// letter (so `1.0a` is older than `1.0`).
fn rpmvercmp(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let (a, b) = (a.as_bytes(), b.as_bytes());
    let (mut one, mut two) = (0usize, 0usize);
    let (mut end1, mut end2) = (0usize, 0usize);

    while one < a.len() && two < b.len() {
        while one < a.len() && !a[one].is_ascii_alphanumeric() {
            one += 1;
        }
        while two < b.len() && !b[two].is_ascii_alphanumeric() {
            two += 1;
        }
        if one >= a.len() || two >= b.len() {
            break;
        }

        // Differing separator lengths decide immediately
        let (sep1, sep2) = (one - end1, two - end2);
        if sep1 != sep2 {
            return sep1.cmp(&sep2);
        }

        let is_num = a[one].is_ascii_digit();
        let class: fn(&u8) -> bool = if is_num {
            u8::is_ascii_digit
        } else {
            u8::is_ascii_alphabetic
        };

        end1 = one;
        end2 = two;
        while end1 < a.len() && class(&a[end1]) {
            end1 += 1;
        }
        while end2 < b.len() && class(&b[end2]) {
            end2 += 1;
        }

        // Segment types differ: numbers are newer than letters
        if end2 == two {
            return if is_num {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }

        let mut seg1 = &a[one..end1];
        let mut seg2 = &b[two..end2];
        if is_num {
            seg1 = trim_leading_zeros(seg1);
            seg2 = trim_leading_zeros(seg2);
            match seg1.len().cmp(&seg2.len()) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }

        match seg1.cmp(seg2) {
            Ordering::Equal => {}
            ord => return ord,
        }

        one = end1;
        two = end2;
    }

    let rest1 = &a[one..];
    let rest2 = &b[two..];
    if rest1.is_empty() && rest2.is_empty() {
        return Ordering::Equal;
    }

    let starts_alpha = |s: &[u8]| s.first().is_some_and(u8::is_ascii_alphabetic);
    if (rest1.is_empty() && !starts_alpha(rest2)) || starts_alpha(rest1) {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

fn trim_leading_zeros(seg: &[u8]) -> &[u8] {
    let zeros = seg.iter().take_while(|&&c| c == b'0').count();
    &seg[zeros..]
}
