use crate::constants::PARTICLES_CONTAINER;
use crate::dom;
use crate::scene::{burst_schedule, ParticleSpec, ParticleTuning};
use std::rc::Rc;
use web_sys as web;

/// Creates one rising particle in the container and schedules its removal.
pub fn spawn_particle(document: &web::Document, container: &web::Element, tuning: &ParticleTuning) {
    let spec = ParticleSpec::random(&mut rand::thread_rng(), tuning);
    let el = match document.create_element("div") {
        Ok(el) => el,
        Err(e) => {
            log::warn!("[particles] create failed: {:?}", e);
            return;
        }
    };
    el.set_class_name("particle");
    let style = spec
        .style_props()
        .iter()
        .map(|(k, v)| format!("{}: {}", k, v))
        .collect::<Vec<_>>()
        .join("; ");
    _ = el.set_attribute("style", &style);
    if container.append_child(&el).is_err() {
        return;
    }
    dom::set_timeout(spec.lifetime_ms(), move || {
        if el.parent_node().is_some() {
            el.remove();
        }
    });
}

/// Spawns particles continuously plus an initial burst.
pub fn start(document: &web::Document, tuning: ParticleTuning) {
    let Ok(Some(container)) = document.query_selector(PARTICLES_CONTAINER) else {
        log::info!("[particles] no container, spawner disabled");
        return;
    };
    let tuning = Rc::new(tuning);

    {
        let document = document.clone();
        let container = container.clone();
        let tuning = tuning.clone();
        dom::set_interval(tuning.spawn_interval_ms, move || {
            spawn_particle(&document, &container, &tuning);
        });
    }

    for delay in burst_schedule(&tuning) {
        let document = document.clone();
        let container = container.clone();
        let tuning = tuning.clone();
        dom::set_timeout(delay, move || spawn_particle(&document, &container, &tuning));
    }
    log::info!(
        "[particles] every {}ms, burst of {}",
        tuning.spawn_interval_ms,
        tuning.burst_count
    );
}
