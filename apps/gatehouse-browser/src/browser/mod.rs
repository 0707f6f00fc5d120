use eframe::egui;
use gate_engine::EngineEvent;
use gate_engine::LocalEngine;
use gate_engine::RenderEngine;
use gate_nav::Gateway;
use gate_nav::NavigationDecision;
use gate_nav::Submission;
use gate_pages::ErrorPage;
use gate_view::LoadCheck;
use gate_view::View;
use gate_view::assess_load;
use gate_view::assess_title;

include!("constants.rs");
include!("types.rs");

mod navigation;
mod startup;
mod ui;

pub(crate) use startup::run;
