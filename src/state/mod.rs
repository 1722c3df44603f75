mod persistence;

pub use persistence::{
    load_catalog, load_config, load_pack_registry, load_plan, load_profile, save_catalog,
    save_pack_registry, save_plan,
};
