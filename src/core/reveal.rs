// Scroll-triggered entrance animations.
//
// A section is revealed once its top edge climbs above a fixed fraction of
// the viewport. Revealing is sticky: nothing here ever hides a section again.
// Skill and project sections also stagger the reveal of their cards. Every
// check of an in-view section schedules the stagger again; card reveals are
// idempotent.

use super::constants::{PROJECT_STAGGER_MS, REVEAL_VIEWPORT_FRACTION, SKILL_STAGGER_MS};
use super::schedule::Deferred;
use fnv::FnvHashSet;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionTags {
    pub skills: bool,
    pub projects: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardGroup {
    Skill,
    Project,
}

impl CardGroup {
    pub fn stagger_ms(self) -> u32 {
        match self {
            Self::Skill => SKILL_STAGGER_MS,
            Self::Project => PROJECT_STAGGER_MS,
        }
    }
}

/// Deferred reveal of one card inside one section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CardReveal {
    pub section: usize,
    pub group: CardGroup,
    pub index: usize,
}

/// Shape of a section as last read from the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SectionLayout {
    pub tags: SectionTags,
    pub skill_cards: usize,
    pub project_cards: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealPlan {
    pub section: usize,
    /// First time this section crossed the threshold.
    pub newly_visible: bool,
    /// Pin the section at full opacity and no offset right away.
    pub force_visible: bool,
    pub cards: SmallVec<[Deferred<CardReveal>; 8]>,
}

#[inline]
pub fn in_view(top: f64, viewport_height: f64) -> bool {
    top < viewport_height * REVEAL_VIEWPORT_FRACTION
}

pub fn stagger(
    section: usize,
    group: CardGroup,
    count: usize,
) -> impl Iterator<Item = Deferred<CardReveal>> {
    (0..count).map(move |index| {
        Deferred::after(
            index as u32 * group.stagger_ms(),
            CardReveal {
                section,
                group,
                index,
            },
        )
    })
}

/// Visibility state for every section on the page.
#[derive(Clone, Debug, Default)]
pub struct RevealBoard {
    sections: Vec<SectionLayout>,
    visible: Vec<bool>,
    cards_visible: FnvHashSet<CardReveal>,
}

impl RevealBoard {
    pub fn new(sections: Vec<SectionLayout>) -> Self {
        let visible = vec![false; sections.len()];
        Self {
            sections,
            visible,
            cards_visible: FnvHashSet::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Replace a section's card counts and tags with what the page holds now.
    /// Out-of-range sections are ignored.
    pub fn set_layout(&mut self, section: usize, layout: SectionLayout) {
        if let Some(slot) = self.sections.get_mut(section) {
            *slot = layout;
        }
    }

    /// Evaluate every section against the current viewport. `tops` holds each
    /// section's top edge relative to the viewport, index-aligned with the
    /// layouts given to [`RevealBoard::new`].
    pub fn check(&mut self, tops: &[f64], viewport_height: f64) -> Vec<RevealPlan> {
        let mut plans = Vec::new();
        for (i, (layout, top)) in self.sections.iter().zip(tops).enumerate() {
            if !in_view(*top, viewport_height) {
                continue;
            }
            let newly_visible = !self.visible[i];
            self.visible[i] = true;

            let mut cards = SmallVec::new();
            if layout.tags.skills {
                cards.extend(stagger(i, CardGroup::Skill, layout.skill_cards));
            }
            if layout.tags.projects {
                cards.extend(stagger(i, CardGroup::Project, layout.project_cards));
            }
            plans.push(RevealPlan {
                section: i,
                newly_visible,
                force_visible: layout.tags.projects,
                cards,
            });
        }
        plans
    }

    /// Apply a fired card reveal. Returns false when the card was already shown.
    pub fn reveal_card(&mut self, card: CardReveal) -> bool {
        self.cards_visible.insert(card)
    }

    pub fn is_visible(&self, section: usize) -> bool {
        self.visible.get(section).copied().unwrap_or(false)
    }

    pub fn is_card_visible(&self, card: CardReveal) -> bool {
        self.cards_visible.contains(&card)
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }
}
