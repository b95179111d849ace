//! Placement specs: `designator[@x,y[,degrees]]` arguments from the CLI.

use crate::error::PadError;

/// Where and how to place one image on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Image designator passed to the resolver.
    pub designator: String,
    /// Origin x.
    pub x: f64,
    /// Origin y.
    pub y: f64,
    /// Clockwise rotation in degrees.
    pub degrees: f64,
}

/// Parse a placement spec.
///
/// The text after the last `@` is a placement only if it contains a comma;
/// otherwise the whole argument is the designator and the image sits at the
/// origin unrotated. This keeps designators such as `user@host` intact.
///
/// # Errors
///
/// Returns [`PadError::InvalidArgument`] for an empty designator, a wrong
/// number of placement fields, or non-finite numbers.
pub fn parse_placement(spec: &str) -> Result<Placement, PadError> {
    let (designator, fields) = match spec.rsplit_once('@') {
        Some((designator, suffix)) if suffix.contains(',') => (designator, Some(suffix)),
        _ => (spec, None),
    };

    if designator.is_empty() {
        return Err(PadError::InvalidArgument(format!("Missing image designator in '{spec}'")));
    }

    let (x, y, degrees) = match fields {
        None => (0.0, 0.0, 0.0),
        Some(fields) => {
            let numbers = fields
                .split(',')
                .map(|f| parse_number(f.trim(), spec))
                .collect::<Result<Vec<_>, _>>()?;
            match numbers[..] {
                [x, y] => (x, y, 0.0),
                [x, y, degrees] => (x, y, degrees),
                _ => {
                    return Err(PadError::InvalidArgument(format!(
                        "Placement '{fields}' in '{spec}' must be x,y or x,y,degrees"
                    )));
                }
            }
        }
    };

    Ok(Placement { designator: designator.to_string(), x, y, degrees })
}

fn parse_number(field: &str, spec: &str) -> Result<f64, PadError> {
    field
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| PadError::InvalidArgument(format!("Unsupported number '{field}' in '{spec}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_designator_sits_at_origin() {
        let p = parse_placement("widget.png").unwrap();
        assert_eq!(p, Placement { designator: "widget.png".into(), x: 0.0, y: 0.0, degrees: 0.0 });
    }

    #[test]
    fn position_only() {
        let p = parse_placement("icons/a.png@5,7.5").unwrap();
        assert_eq!(p.designator, "icons/a.png");
        assert_eq!((p.x, p.y, p.degrees), (5.0, 7.5, 0.0));
    }

    #[test]
    fn position_and_rotation() {
        let p = parse_placement("widget.png@-5, 5, 90").unwrap();
        assert_eq!((p.x, p.y, p.degrees), (-5.0, 5.0, 90.0));
    }

    #[test]
    fn at_sign_without_comma_stays_in_designator() {
        let p = parse_placement("https://user@example.com/a.png").unwrap();
        assert_eq!(p.designator, "https://user@example.com/a.png");
        let p = parse_placement("https://user@example.com/a.png@1,2").unwrap();
        assert_eq!(p.designator, "https://user@example.com/a.png");
        assert_eq!((p.x, p.y), (1.0, 2.0));
    }

    #[test]
    fn rejects_bad_specs() {
        for bad in ["", "@1,2", "a.png@1,2,3,4", "a.png@x,2", "a.png@1,", "a.png@1,inf"] {
            assert!(
                matches!(parse_placement(bad), Err(PadError::InvalidArgument(_))),
                "'{bad}' should be rejected"
            );
        }
    }
}
