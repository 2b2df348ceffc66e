mod assembler;
mod model;

pub use assembler::CatalogAssembler;
pub use model::{
    CATALOG_VERSION, CatalogEntry, ExtractionState, Localization, OrderedMap, PluralVariation,
    StringCatalog, StringUnit, UnitState, Variations,
};
