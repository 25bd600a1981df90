use crate::constants::{
    PROJECTS_SECTION_CLASS, PROJECT_CARD_SELECTOR, SECTION_SELECTOR, SKILLS_SECTION_CLASS,
    SKILL_CARD_SELECTOR, VISIBLE_CLASS,
};
use crate::core::{CardGroup, CardReveal, RevealBoard, SectionLayout, SectionTags};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Cards found inside one section, read fresh on every check.
struct SectionCards {
    skill: Vec<web::Element>,
    project: Vec<web::Element>,
}

impl SectionCards {
    fn query(section: &web::Element) -> Self {
        Self {
            skill: dom::elements(section.query_selector_all(SKILL_CARD_SELECTOR)),
            project: dom::elements(section.query_selector_all(PROJECT_CARD_SELECTOR)),
        }
    }

    fn get(&self, group: CardGroup, index: usize) -> Option<&web::Element> {
        match group {
            CardGroup::Skill => self.skill.get(index),
            CardGroup::Project => self.project.get(index),
        }
    }
}

fn layout_of(section: &web::Element, cards: &SectionCards) -> SectionLayout {
    let classes = section.class_list();
    SectionLayout {
        tags: SectionTags {
            skills: classes.contains(SKILLS_SECTION_CLASS),
            projects: classes.contains(PROJECTS_SECTION_CLASS),
        },
        skill_cards: cards.skill.len(),
        project_cards: cards.project.len(),
    }
}

/// Entrance animations for every `<section>` present at setup. Cards are
/// looked up again on each check, so cards added later still animate.
pub struct Reveal {
    sections: Vec<web::Element>,
    board: RefCell<RevealBoard>,
}

impl Reveal {
    pub fn collect(document: &web::Document) -> Rc<Self> {
        let sections = dom::elements(document.query_selector_all(SECTION_SELECTOR));
        let layouts = sections
            .iter()
            .map(|el| layout_of(el, &SectionCards::query(el)))
            .collect();
        Rc::new(Self {
            sections,
            board: RefCell::new(RevealBoard::new(layouts)),
        })
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Reveal every section whose top edge is high enough in the viewport.
    pub fn check(self: &Rc<Self>, window: &web::Window) {
        let cards: Vec<SectionCards> = self.sections.iter().map(SectionCards::query).collect();
        let tops: Vec<f64> = self
            .sections
            .iter()
            .map(|el| el.get_bounding_client_rect().top())
            .collect();
        let plans = {
            let mut board = self.board.borrow_mut();
            for (i, (el, found)) in self.sections.iter().zip(&cards).enumerate() {
                board.set_layout(i, layout_of(el, found));
            }
            board.check(&tops, dom::viewport_height(window))
        };

        for plan in plans {
            let (Some(section), Some(found)) =
                (self.sections.get(plan.section), cards.get(plan.section))
            else {
                continue;
            };
            _ = section.class_list().add_1(VISIBLE_CLASS);
            if plan.newly_visible {
                log::debug!("[reveal] section {} visible", plan.section);
            }
            for deferred in plan.cards {
                let reveal = deferred.task;
                let Some(card) = found.get(reveal.group, reveal.index).cloned() else {
                    continue;
                };
                let this = self.clone();
                dom::defer(deferred.delay_ms, move || this.show_card(&card, reveal));
            }
            if plan.force_visible {
                dom::set_style(section, "opacity", "1");
                dom::set_style(section, "transform", "translateY(0)");
            }
        }
    }

    fn show_card(&self, card: &web::Element, reveal: CardReveal) {
        _ = card.class_list().add_1(VISIBLE_CLASS);
        self.board.borrow_mut().reveal_card(reveal);
    }
}
