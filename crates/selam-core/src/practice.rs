//! Practice-set extraction: flatten a generated tree's exercises into one
//! pool, shuffle, and take a fixed-size pseudo-lesson.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::curriculum::Curriculum;
use crate::exercise::capitalize;
use crate::types::{Exercise, Lesson};

pub const DEFAULT_PRACTICE_SIZE: usize = 10;

/// Extract a ten-exercise practice lesson from an existing tree
pub fn practice_set<R: Rng>(curriculum: &Curriculum, kind: &str, rng: &mut R) -> Lesson {
    practice_set_with_size(curriculum, kind, DEFAULT_PRACTICE_SIZE, rng)
}

/// Extract a practice lesson of `size` exercises.
///
/// Exercises are cloned out of the tree and re-identified as
/// `practice-{kind}-{index}`; the pseudo-lesson belongs to no unit.
pub fn practice_set_with_size<R: Rng>(
    curriculum: &Curriculum,
    kind: &str,
    size: usize,
    rng: &mut R,
) -> Lesson {
    let mut pool: Vec<Exercise> = curriculum.exercises().cloned().collect();
    pool.shuffle(rng);
    pool.truncate(size);

    for (index, exercise) in pool.iter_mut().enumerate() {
        exercise.set_id(format!("practice-{kind}-{index}"));
    }

    Lesson {
        id: format!("practice-{kind}"),
        unit_id: 0,
        title: format!("{} practice", capitalize(kind)),
        exercises: pool,
    }
}
