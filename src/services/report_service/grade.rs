use crate::models::scan::Grade;

const GRADE_A: f64 = 0.90;
const GRADE_B: f64 = 0.75;
const GRADE_C: f64 = 0.60;

// Inclusive lower bounds, first match wins. Out-of-range scores are clamped
// to [0, 1] and NaN grades as D.
pub fn grade(score: f64) -> Grade {
    if score.is_nan() {
        return Grade::D;
    }
    let score = score.clamp(0.0, 1.0);
    if score >= GRADE_A {
        Grade::A
    } else if score >= GRADE_B {
        Grade::B
    } else if score >= GRADE_C {
        Grade::C
    } else {
        Grade::D
    }
}
