//! 구간(브래킷) 테이블 조회와 선형 보간을 제공한다.
//!
//! 구간은 반개구간 `[min, max)` 이며, 경계값은 위 구간에 속한다.
//! 테이블 범위를 벗어난 입력은 가장 가까운 구간으로 클램프하고 `clamped`로 표시한다.

use tracing::debug;

/// 하나의 구간 레코드.
#[derive(Debug, Clone, Copy)]
pub struct Bracket<T> {
    pub min: f64,
    pub max: f64,
    pub value: T,
}

impl<T> Bracket<T> {
    pub const fn new(min: f64, max: f64, value: T) -> Self {
        Self { min, max, value }
    }

    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x < self.max
    }
}

/// 구간 조회 결과.
#[derive(Debug, Clone, Copy)]
pub struct BracketHit<'a, T> {
    pub bracket: &'a Bracket<T>,
    /// true면 테이블 범위 밖이라 가장자리 구간으로 클램프됨을 의미한다.
    pub clamped: bool,
}

impl<'a, T> BracketHit<'a, T> {
    pub fn value(&self) -> &'a T {
        &self.bracket.value
    }
}

/// 오름차순으로 정렬된 연속 구간 테이블에서 `x`가 속한 구간을 찾는다.
/// 빈 테이블이면 `None`.
pub fn lookup<T>(table: &[Bracket<T>], x: f64) -> Option<BracketHit<'_, T>> {
    let first = table.first()?;
    let last = table.last()?;
    if !x.is_finite() || x < first.min {
        debug!(x, min = first.min, "bracket lookup clamped to first bracket");
        return Some(BracketHit {
            bracket: first,
            clamped: true,
        });
    }
    if x >= last.max {
        debug!(x, max = last.max, "bracket lookup clamped to last bracket");
        return Some(BracketHit {
            bracket: last,
            clamped: true,
        });
    }
    // 테이블 사이에 빈틈이 있으면 위쪽 구간을 택한다.
    let idx = table.partition_point(|b| b.max <= x);
    table.get(idx).map(|bracket| BracketHit {
        bracket,
        clamped: false,
    })
}

/// 보간 곡선의 한 점.
#[derive(Debug, Clone, Copy)]
pub struct CurvePoint {
    pub x: f64,
    pub y: f64,
}

impl CurvePoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 보간 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolated {
    pub value: f64,
    pub clamped: bool,
}

/// x 오름차순 점 목록을 선형 보간한다. 범위 밖은 끝점 값으로 클램프한다.
pub fn interpolate(points: &[CurvePoint], x: f64) -> Option<Interpolated> {
    let first = points.first()?;
    let last = points.last()?;
    if points.len() == 1 || !x.is_finite() || x <= first.x {
        let clamped = points.len() == 1 || !x.is_finite() || x < first.x;
        if clamped {
            debug!(x, min = first.x, "curve interpolation clamped to first point");
        }
        return Some(Interpolated {
            value: first.y,
            clamped,
        });
    }
    if x >= last.x {
        let clamped = x > last.x;
        if clamped {
            debug!(x, max = last.x, "curve interpolation clamped to last point");
        }
        return Some(Interpolated {
            value: last.y,
            clamped,
        });
    }
    for win in points.windows(2) {
        let a = win[0];
        let b = win[1];
        if x >= a.x && x <= b.x {
            let frac = (x - a.x) / (b.x - a.x);
            return Some(Interpolated {
                value: a.y + frac * (b.y - a.y),
                clamped: false,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [Bracket<u32>; 3] = [
        Bracket::new(0.0, 10.0, 1),
        Bracket::new(10.0, 20.0, 2),
        Bracket::new(20.0, 30.0, 3),
    ];

    #[test]
    fn boundary_takes_higher_bracket() {
        let hit = lookup(&TABLE, 10.0).unwrap();
        assert_eq!(*hit.value(), 2);
        assert!(!hit.clamped);
        assert_eq!(*lookup(&TABLE, 9.999).unwrap().value(), 1);
    }

    #[test]
    fn out_of_range_clamps() {
        let low = lookup(&TABLE, -5.0).unwrap();
        assert_eq!(*low.value(), 1);
        assert!(low.clamped);

        // 마지막 구간의 max도 반개구간이라 클램프 대상
        let high = lookup(&TABLE, 30.0).unwrap();
        assert_eq!(*high.value(), 3);
        assert!(high.clamped);

        let nan = lookup(&TABLE, f64::NAN).unwrap();
        assert_eq!(*nan.value(), 1);
        assert!(nan.clamped);
    }

    #[test]
    fn empty_table_is_none() {
        let empty: [Bracket<u32>; 0] = [];
        assert!(lookup(&empty, 1.0).is_none());
        assert!(interpolate(&[], 1.0).is_none());
    }

    #[test]
    fn interpolation_midpoint_and_clamp() {
        let pts = [CurvePoint::new(6.0, 12.0), CurvePoint::new(8.0, 20.0)];
        let mid = interpolate(&pts, 7.0).unwrap();
        assert!((mid.value - 16.0).abs() < 1e-9);
        assert!(!mid.clamped);

        let over = interpolate(&pts, 12.0).unwrap();
        assert_eq!(over.value, 20.0);
        assert!(over.clamped);

        let exact = interpolate(&pts, 6.0).unwrap();
        assert_eq!(exact.value, 12.0);
        assert!(!exact.clamped);
    }
}
