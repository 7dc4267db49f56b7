/// External (serializable) representations of catalogs and generated rooms
pub mod ext_repr;
/// Conversion of internal entities into their external representation
pub mod export;
/// Conversion of external representations into validated internal entities
pub mod import;
/// SVG previews of generated rooms
pub mod svg;
