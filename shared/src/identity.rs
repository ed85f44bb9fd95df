//! Canonical string keys for board geometry.
//!
//! Keys double as render identity and map keys, so they must only ever be
//! derived from geometry. Decoders expect self-produced strings: they parse
//! integers and nothing more.

use std::num::ParseIntError;

use thiserror::Error;

use crate::coords::{Edge, Position, Qr, Qrp};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("key {key:?} is missing component {index}")]
    Missing { key: String, index: usize },
    #[error("key {key:?} has a non-integer component {token:?}: {source}")]
    BadInteger {
        key: String,
        token: String,
        source: ParseIntError,
    },
}

pub fn encode_qr(qr: Qr) -> String {
    format!("{},{}", qr.q, qr.r)
}

pub fn encode_qrp(qrp: Qrp) -> String {
    format!("{},{},{}", qrp.q, qrp.r, qrp.p.key_token())
}

/// `(p1)-(p2)`, in the order the edge carries its points.
pub fn encode_edge(edge: &Edge) -> String {
    let [a, b] = edge.points();
    format!("({})-({})", encode_qrp(*a), encode_qrp(*b))
}

pub fn decode_qr(key: &str) -> Result<Qr, KeyError> {
    let mut parts = key.split(',');
    let q = parse_component(key, parts.next(), 0)?;
    let r = parse_component(key, parts.next(), 1)?;
    Ok(Qr::new(q, r))
}

pub fn decode_qrp(key: &str) -> Result<Qrp, KeyError> {
    let mut parts = key.split(',');
    let q = parse_component(key, parts.next(), 0)?;
    let r = parse_component(key, parts.next(), 1)?;
    let p = Position::from_key_token(parts.next().unwrap_or_default());
    Ok(Qrp::new(q, r, p))
}

fn parse_component(key: &str, token: Option<&str>, index: usize) -> Result<i32, KeyError> {
    let Some(token) = token else {
        return Err(KeyError::Missing {
            key: key.to_string(),
            index,
        });
    };
    token
        .trim()
        .parse::<i32>()
        .map_err(|source| KeyError::BadInteger {
            key: key.to_string(),
            token: token.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn position() -> impl Strategy<Value = Position> {
        prop_oneof![Just(Position::Top), Just(Position::Bottom)]
    }

    proptest! {
        #[test]
        fn qr_roundtrip(q in any::<i32>(), r in any::<i32>()) {
            let qr = Qr::new(q, r);
            prop_assert_eq!(decode_qr(&encode_qr(qr)), Ok(qr));
        }

        #[test]
        fn qrp_roundtrip(q in any::<i32>(), r in any::<i32>(), p in position()) {
            let qrp = Qrp::new(q, r, p);
            prop_assert_eq!(decode_qrp(&encode_qrp(qrp)), Ok(qrp));
        }
    }

    #[test]
    fn qr_key_format() {
        assert_eq!(encode_qr(Qr::new(1, -1)), "1,-1");
        assert_eq!(encode_qr(Qr::new(0, 0)), "0,0");
    }

    #[test]
    fn qrp_key_uses_first_letter_of_position() {
        assert_eq!(encode_qrp(Qrp::new(-2, 0, Position::Top)), "-2,0,t");
        assert_eq!(encode_qrp(Qrp::new(3, -3, Position::Bottom)), "3,-3,b");
    }

    #[test]
    fn qrp_decode_defaults_unknown_position_to_bottom() {
        assert_eq!(decode_qrp("1,2,z"), Ok(Qrp::new(1, 2, Position::Bottom)));
        assert_eq!(decode_qrp("1,2"), Ok(Qrp::new(1, 2, Position::Bottom)));
    }

    #[test]
    fn edge_key_preserves_point_order() {
        let a = Qrp::new(0, 0, Position::Top);
        let b = Qrp::new(1, -1, Position::Bottom);
        assert_eq!(encode_edge(&Edge::new(a, b)), "(0,0,t)-(1,-1,b)");
        assert_eq!(encode_edge(&Edge::new(b, a)), "(1,-1,b)-(0,0,t)");
    }

    #[test]
    fn malformed_integers_surface_as_errors() {
        assert!(matches!(
            decode_qr("a,1"),
            Err(KeyError::BadInteger { ref token, .. }) if token == "a"
        ));
        assert_eq!(
            decode_qr("7"),
            Err(KeyError::Missing {
                key: "7".to_string(),
                index: 1
            })
        );
    }
}
