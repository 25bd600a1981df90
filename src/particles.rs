use crate::constants::{PARTICLE_DOT_CLASS, PARTICLE_FIELD_CLASS};
use crate::core::constants::PARTICLE_COUNT;
use crate::core::particles;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

/// Append the decorative particle field to `body`. Returns the number of
/// dots created.
pub fn spawn_field(document: &web::Document, body: &web::HtmlElement) -> usize {
    let Ok(field) = document.create_element("div") else {
        return 0;
    };
    field.set_class_name(PARTICLE_FIELD_CLASS);
    _ = body.append_child(&field);

    let mut rng = StdRng::from_entropy();
    let mut spawned = 0;
    for p in particles::scatter(&mut rng, PARTICLE_COUNT) {
        let Ok(dot) = document.create_element("div") else {
            continue;
        };
        dot.set_class_name(PARTICLE_DOT_CLASS);
        _ = dot.set_attribute("style", &p.style());
        if field.append_child(&dot).is_ok() {
            spawned += 1;
        }
    }
    spawned
}
