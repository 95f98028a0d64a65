//! Bézier-Kurven beliebigen Grades über den verallgemeinerten de-Casteljau-Algorithmus.
//!
//! Die Funktionen sind zustandslos: jede Auswertung beginnt bei den Kontrollpunkten.
//! Abtastung liefert Lazy-Iteratoren, die pro Frame neu erzeugt werden.

use super::geometry::lerp;
use glam::Vec2;
use thiserror::Error;

/// Toleranz der oberen Grenze beim Abtasten.
///
/// Der Parameter wird wie in einer Render-Schleife durch wiederholte Addition
/// fortgeschrieben. Der Akkumulationsfehler liegt für Schrittweiten ab 0.001
/// deutlich unter diesem Wert, sodass ein Schritt, der 1.0 rechnerisch trifft,
/// immer noch abgetastet wird (ggf. minimal jenseits von 1.0).
pub const SAMPLE_END_TOLERANCE: f32 = 1e-4;

/// Verletzungen des Aufrufvertrags der Kurvenauswertung.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CurveError {
    /// Auswertung ohne Kontrollpunkte
    #[error("Bézier-Auswertung ohne Kontrollpunkte")]
    EmptyControlPoints,
    /// Schrittweite ≤ 0 oder NaN
    #[error("Abtast-Schrittweite muss positiv sein, war {0}")]
    NonPositiveStep(f32),
}

/// Punkt der Bézier-Kurve vom Grad `points.len() - 1` an Parameter `t`.
///
/// `t` außerhalb von [0, 1] extrapoliert über die letzte Interpolationsstufe.
pub fn evaluate(points: &[Vec2], t: f32) -> Result<Vec2, CurveError> {
    let mut scratch = Vec::with_capacity(points.len());
    evaluate_with(points, &mut scratch, t)
}

/// de Casteljau mit wiederverwendetem Arbeitspuffer.
fn evaluate_with(points: &[Vec2], scratch: &mut Vec<Vec2>, t: f32) -> Result<Vec2, CurveError> {
    let Some(&first) = points.first() else {
        return Err(CurveError::EmptyControlPoints);
    };
    if points.len() == 1 {
        return Ok(first);
    }

    scratch.clear();
    scratch.extend_from_slice(points);

    let mut n = scratch.len();
    while n > 1 {
        for i in 0..n - 1 {
            scratch[i] = lerp(scratch[i], scratch[i + 1], t);
        }
        n -= 1;
    }

    Ok(scratch[0])
}

fn check_inputs(points: &[Vec2], step: f32) -> Result<(), CurveError> {
    if points.is_empty() {
        return Err(CurveError::EmptyControlPoints);
    }
    // `!(step > 0.0)` lehnt auch NaN ab
    if !(step > 0.0) {
        return Err(CurveError::NonPositiveStep(step));
    }
    Ok(())
}

/// Tastet die Kurve bei t = 0, step, 2·step, … ab, solange t ≤ 1 (mit Toleranz).
pub fn sample(points: &[Vec2], step: f32) -> Result<CurveSamples<'_>, CurveError> {
    check_inputs(points, step)?;
    Ok(CurveSamples {
        points,
        params: ParamSteps::new(step),
        scratch: Vec::with_capacity(points.len()),
    })
}

/// Liefert Liniensegmente `(B(p), B(p + step))` für dieselbe Parameterfolge wie [`sample`].
///
/// Gemeinsame Endpunkte benachbarter Segmente werden jeweils neu ausgewertet.
pub fn sample_segments(points: &[Vec2], step: f32) -> Result<CurveSegments<'_>, CurveError> {
    check_inputs(points, step)?;
    Ok(CurveSegments {
        points,
        step,
        params: ParamSteps::new(step),
        scratch: Vec::with_capacity(points.len()),
    })
}

/// Parameterfolge 0, step, 2·step, … mit akkumulierender f32-Addition.
#[derive(Debug, Clone)]
struct ParamSteps {
    next: f32,
    step: f32,
}

impl ParamSteps {
    fn new(step: f32) -> Self {
        Self { next: 0.0, step }
    }
}

impl Iterator for ParamSteps {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        let p = self.next;
        if !(p <= 1.0 + SAMPLE_END_TOLERANCE) {
            return None;
        }
        let advanced = p + self.step;
        // Schritt unterhalb der f32-Auflösung: Folge beenden statt endlos zu laufen
        self.next = if advanced > p {
            advanced
        } else {
            f32::INFINITY
        };
        Some(p)
    }
}

/// Lazy-Folge der abgetasteten Kurvenpunkte.
#[derive(Debug, Clone)]
pub struct CurveSamples<'a> {
    points: &'a [Vec2],
    params: ParamSteps,
    scratch: Vec<Vec2>,
}

impl Iterator for CurveSamples<'_> {
    type Item = Vec2;

    fn next(&mut self) -> Option<Vec2> {
        let p = self.params.next()?;
        evaluate_with(self.points, &mut self.scratch, p).ok()
    }
}

impl std::iter::FusedIterator for CurveSamples<'_> {}

/// Lazy-Folge der Polylinien-Segmente entlang der Kurve.
#[derive(Debug, Clone)]
pub struct CurveSegments<'a> {
    points: &'a [Vec2],
    step: f32,
    params: ParamSteps,
    scratch: Vec<Vec2>,
}

impl Iterator for CurveSegments<'_> {
    type Item = (Vec2, Vec2);

    fn next(&mut self) -> Option<(Vec2, Vec2)> {
        let p = self.params.next()?;
        let begin = evaluate_with(self.points, &mut self.scratch, p).ok()?;
        let end = evaluate_with(self.points, &mut self.scratch, p + self.step).ok()?;
        Some((begin, end))
    }
}

impl std::iter::FusedIterator for CurveSegments<'_> {}

#[cfg(test)]
mod tests;
