//! Dispatcher - one entry point for every shape pairing
//!
//! Picks the hit-test or resolver from the operands' shape kinds and the
//! `react` flag. A collection operand is broadcast against the other operand,
//! from the highest index down; each pair sees the previous pairs' corrections.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::Vec2;
use crate::domain::{CollisionConfig, CollisionError, Outcome, Space, Sprite};

use super::hit_test::{hit_test_circle, hit_test_point, hit_test_rectangle};
use super::pair_mut;
use super::region::{circle_rectangle_collision, hit_test_circle_rectangle};
use super::resolve::{circle_collision, moving_circle_collision, rectangle_collision};

/// Flags for a dispatched test
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HitOptions {
    /// Resolve the overlap instead of only reporting it
    pub react: bool,
    /// Also change velocities when reacting
    pub bounce: bool,
    pub space: Space,
}

impl HitOptions {
    pub fn detect() -> Self {
        Self::default()
    }

    pub fn react(bounce: bool) -> Self {
        Self { react: true, bounce, ..Self::default() }
    }

    pub fn in_space(mut self, space: Space) -> Self {
        self.space = space;
        self
    }
}

pub enum Operand<'a> {
    Sprite(&'a mut Sprite),
    /// Bare coordinate pair, only usable against a shape
    Point(Vec2),
    Many(&'a mut [Sprite]),
}

impl Operand<'_> {
    fn name(&self) -> &'static str {
        match self {
            Operand::Sprite(sprite) => sprite.shape.name(),
            Operand::Point(_) => "a coordinate pair",
            Operand::Many(_) => "a sprite collection",
        }
    }
}

/// Collision of the broadcast operand with one collection element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contact {
    pub index: usize,
    pub outcome: Outcome,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Report {
    /// Single pair; `None` when nothing collided
    Single(Option<Outcome>),
    /// Collection broadcast, in evaluation order (highest index first)
    Many(Vec<Contact>),
}

impl Report {
    pub fn is_hit(&self) -> bool {
        match self {
            Report::Single(outcome) => outcome.is_some(),
            Report::Many(contacts) => !contacts.is_empty(),
        }
    }
}

/// Dispatch without a callback
pub fn hit(
    a: Operand<'_>,
    b: Operand<'_>,
    options: &HitOptions,
    config: &CollisionConfig,
) -> Result<Report, CollisionError> {
    hit_with(a, b, options, config, |_, _| {})
}

/// Dispatch and call `extra` for every collision.
///
/// `extra` receives the outcome and, for collection operands, the index of the
/// colliding element.
pub fn hit_with<F>(
    a: Operand<'_>,
    b: Operand<'_>,
    options: &HitOptions,
    config: &CollisionConfig,
    mut extra: F,
) -> Result<Report, CollisionError>
where
    F: FnMut(Outcome, Option<usize>),
{
    match (a, b) {
        (Operand::Sprite(a), Operand::Sprite(b)) => {
            let outcome = test_pair(a, b, options, config);
            if let Some(outcome) = outcome {
                extra(outcome, None);
            }
            Ok(Report::Single(outcome))
        }
        (Operand::Point(point), Operand::Sprite(sprite))
        | (Operand::Sprite(sprite), Operand::Point(point)) => {
            let outcome = hit_test_point(point, sprite).then_some(Outcome::Hit);
            if let Some(outcome) = outcome {
                extra(outcome, None);
            }
            Ok(Report::Single(outcome))
        }
        (Operand::Sprite(single), Operand::Many(many)) | (Operand::Many(many), Operand::Sprite(single)) => {
            Ok(Report::Many(broadcast(many, &mut extra, |other| {
                test_pair(&mut *single, other, options, config)
            })))
        }
        (Operand::Point(point), Operand::Many(many)) | (Operand::Many(many), Operand::Point(point)) => {
            Ok(Report::Many(broadcast(many, &mut extra, |other| {
                hit_test_point(point, other).then_some(Outcome::Hit)
            })))
        }
        (a, b) => {
            let err = CollisionError::InvalidPairing { left: a.name(), right: b.name() };
            console_warn!("{}", err);
            Err(err)
        }
    }
}

fn broadcast<F, T>(many: &mut [Sprite], extra: &mut F, mut test: T) -> Vec<Contact>
where
    F: FnMut(Outcome, Option<usize>),
    T: FnMut(&mut Sprite) -> Option<Outcome>,
{
    let mut contacts = Vec::new();
    for index in (0..many.len()).rev() {
        if let Some(outcome) = test(&mut many[index]) {
            extra(outcome, Some(index));
            contacts.push(Contact { index, outcome });
        }
    }
    contacts
}

/// Route one sprite pair by shape kind and `react`.
///
/// Circle vs circle reacts with the moving resolver only when both circles have
/// a non-zero velocity. A rectangle first operand is always tested as a
/// rectangle, whatever the second operand is.
pub fn test_pair(
    a: &mut Sprite,
    b: &mut Sprite,
    options: &HitOptions,
    config: &CollisionConfig,
) -> Option<Outcome> {
    if !options.react {
        return probe(a, b, options.space, config);
    }

    let HitOptions { bounce, space, .. } = *options;
    match (a.is_circular(), b.is_circular()) {
        (true, true) => {
            let hit = if !a.velocity.is_zero() && !b.velocity.is_zero() {
                moving_circle_collision(a, b, space, config)
            } else {
                circle_collision(a, b, bounce, space, config)
            };
            hit.then_some(Outcome::Hit)
        }
        (true, false) => circle_rectangle_collision(a, b, bounce, space, config).map(Outcome::Region),
        _ => rectangle_collision(a, b, bounce, space).map(Outcome::Side),
    }
}

/// Non-mutating routing (`react == false`)
pub fn probe(a: &Sprite, b: &Sprite, space: Space, config: &CollisionConfig) -> Option<Outcome> {
    match (a.is_circular(), b.is_circular()) {
        (true, true) => hit_test_circle(a, b, space).then_some(Outcome::Hit),
        (true, false) => hit_test_circle_rectangle(a, b, space, config).map(Outcome::Region),
        _ => hit_test_rectangle(a, b, space).then_some(Outcome::Hit),
    }
}

/// Exhaustive pass over every pair `(i, j)`, `i < j`, through [`test_pair`]
pub fn collide_all(
    sprites: &mut [Sprite],
    options: &HitOptions,
    config: &CollisionConfig,
) -> Vec<(usize, usize, Outcome)> {
    let mut contacts = Vec::new();
    for i in 0..sprites.len() {
        for j in (i + 1)..sprites.len() {
            let (a, b) = pair_mut(sprites, i, j);
            if let Some(outcome) = test_pair(a, b, options, config) {
                contacts.push((i, j, outcome));
            }
        }
    }
    contacts
}

/// Every overlapping pair `(i, j)`, `i < j`, in index order. Nothing moves.
pub fn overlapping_pairs(sprites: &[Sprite], space: Space, config: &CollisionConfig) -> Vec<(usize, usize)> {
    let n = sprites.len();

    #[cfg(feature = "parallel")]
    {
        (0..n)
            .into_par_iter()
            .flat_map_iter(|i| {
                ((i + 1)..n).filter_map(move |j| probe(&sprites[i], &sprites[j], space, config).map(|_| (i, j)))
            })
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        (0..n)
            .flat_map(|i| {
                ((i + 1)..n).filter_map(move |j| probe(&sprites[i], &sprites[j], space, config).map(|_| (i, j)))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/dispatch_tests.rs"]
mod tests;
