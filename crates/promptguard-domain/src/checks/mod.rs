use crate::model::RepoModel;
use crate::policy::EffectiveConfig;
use promptguard_types::Finding;

mod layout;
mod naming;
mod source;
mod structure;


pub fn run_all(model: &RepoModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    source::run(model, cfg, out);
    structure::run(model, cfg, out);
    naming::run(model, cfg, out);
    layout::run(model, cfg, out);
}
