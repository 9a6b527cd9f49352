//! Euler characteristic as a function of threshold.
//!
//! Sweeping a threshold through a continuous field (e.g. the ionized
//! fraction) and recording χ of the selected region at each step gives a
//! one-dimensional topological summary of the field. Downstream this is
//! plotted against threshold or redshift.

use crate::builder::ComplexBuilder;
use crate::euler::euler_characteristic;
use ndarray::ArrayViewD;
use vitebetti_core::{GridError, OccupancyGrid, ThresholdMode};

/// χ and filling factor of one thresholded snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EulerPoint {
    /// Threshold used to select the region.
    pub threshold: f64,
    /// Euler characteristic of the selected region's complex.
    pub chi: i64,
    /// Fraction of voxels selected.
    pub filling_factor: f64,
}

/// Sequence of [`EulerPoint`]s over a list of thresholds.
#[derive(Clone, Debug, PartialEq)]
pub struct EulerCurve {
    points: Vec<EulerPoint>,
}

impl EulerCurve {
    /// Threshold `field` at each value in `thresholds` (in the given order),
    /// build the complex with `builder` and record χ.
    ///
    /// Fails on the first threshold or field value that cannot be used; see
    /// [`OccupancyGrid::from_threshold`].
    pub fn compute<T>(
        field: ArrayViewD<'_, T>,
        thresholds: &[f64],
        mode: ThresholdMode,
        builder: &ComplexBuilder,
    ) -> Result<Self, GridError>
    where
        T: Copy + Into<f64>,
    {
        let points = thresholds
            .iter()
            .map(|&threshold| {
                let grid = OccupancyGrid::from_threshold(field.clone(), threshold, mode)?;
                let cubemap = builder.build(&grid);
                Ok(EulerPoint {
                    threshold,
                    chi: euler_characteristic(&cubemap),
                    filling_factor: grid.filling_factor(),
                })
            })
            .collect::<Result<Vec<_>, GridError>>()?;
        Ok(Self { points })
    }

    /// All points in threshold order.
    pub fn points(&self) -> &[EulerPoint] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the curve has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `(threshold, chi)` pairs.
    pub fn chi_curve(&self) -> Vec<(f64, i64)> {
        self.points.iter().map(|p| (p.threshold, p.chi)).collect()
    }

    /// `(filling_factor, chi)` pairs, the usual axis for comparing
    /// ionization histories.
    pub fn chi_vs_filling(&self) -> Vec<(f64, i64)> {
        self.points
            .iter()
            .map(|p| (p.filling_factor, p.chi))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3};
    use vitebetti_core::{ShapeError, ValueError};

    /// A field peaking at the centre of a 5^3 box.
    fn peaked_field() -> Array3<f64> {
        Array3::from_shape_fn((5, 5, 5), |(x, y, z)| {
            let d = |c: usize| (c as f64 - 2.0).abs();
            3.0 - d(x).max(d(y)).max(d(z))
        })
    }

    #[test]
    fn sweep_through_nested_cubes() {
        let field = peaked_field();
        let curve = EulerCurve::compute(
            field.view().into_dyn(),
            &[3.5, 2.5, 1.5],
            ThresholdMode::Above,
            &ComplexBuilder::new(),
        )
        .unwrap();
        // Nothing, a single voxel, then a solid 3^3 block.
        assert_eq!(curve.chi_curve(), vec![(3.5, 0), (2.5, 1), (1.5, 1)]);
        let filling: Vec<f64> = curve.points().iter().map(|p| p.filling_factor).collect();
        assert_eq!(filling, vec![0.0, 1.0 / 125.0, 27.0 / 125.0]);
    }

    #[test]
    fn shell_appears_below_threshold() {
        let field = peaked_field();
        let curve = EulerCurve::compute(
            field.view().into_dyn(),
            &[2.5, 1.5],
            ThresholdMode::Below,
            &ComplexBuilder::new(),
        )
        .unwrap();
        // Everything but the centre voxel, then only the outer rim: each
        // encloses one cavity.
        assert_eq!(curve.chi_curve(), vec![(2.5, 2), (1.5, 2)]);
    }

    #[test]
    fn empty_threshold_list_gives_empty_curve() {
        let field = peaked_field();
        let curve = EulerCurve::compute(
            field.view().into_dyn(),
            &[],
            ThresholdMode::Above,
            &ComplexBuilder::new(),
        )
        .unwrap();
        assert!(curve.is_empty());
    }

    #[test]
    fn errors_propagate() {
        let flat = Array2::<f64>::zeros((4, 4));
        assert_eq!(
            EulerCurve::compute(
                flat.view().into_dyn(),
                &[0.5],
                ThresholdMode::Above,
                &ComplexBuilder::new()
            ),
            Err(GridError::Shape(ShapeError::WrongRank { ndim: 2 }))
        );
        let field = peaked_field();
        assert!(matches!(
            EulerCurve::compute(
                field.view().into_dyn(),
                &[0.5, f64::INFINITY],
                ThresholdMode::Above,
                &ComplexBuilder::new()
            ),
            Err(GridError::Value(ValueError::InvalidThreshold { .. }))
        ));
    }
}
