//! # Built-in Material Catalog
//!
//! Reference catalog of common structural materials with span
//! applicability ranges and typical depth/span geometry. The built-in
//! data covers the four material families (concrete, steel, timber,
//! masonry) with two representative products each where available.
//!
//! The catalog is an ordered collection: filters and the engine
//! preserve this order in their output, so presentation layers can
//! rely on a stable listing.
//!
//! ## Example
//!
//! ```rust
//! use sizing_core::materials::{MaterialCatalog, MaterialType};
//!
//! let catalog = MaterialCatalog::builtin();
//! let timber = catalog.by_type(MaterialType::Timber);
//! assert!(!timber.is_empty());
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{Material, MaterialType, SPAN_MAX_SENTINEL};

static BUILTIN_MATERIALS: Lazy<Vec<Material>> = Lazy::new(|| {
    vec![
        Material {
            id: "reinforced-concrete".to_string(),
            name: "Reinforced Concrete".to_string(),
            material_type: MaterialType::Concrete,
            span_min: Some(6.0),
            span_max: Some(12.0),
            depth_min: Some(30.0),
            depth_max: Some(50.0),
            description: "Concrete reinforced with steel bars to resist the tension plain \
                          concrete cannot carry."
                .to_string(),
            characteristics: vec![
                "High compressive strength".to_string(),
                "Fire resistant".to_string(),
                "Formable to any shape".to_string(),
                "Requires curing time".to_string(),
            ],
            suitable_for: vec![
                "Multi-storey building columns".to_string(),
                "Primary beams".to_string(),
                "Floor slabs".to_string(),
                "Foundations".to_string(),
            ],
            limitations: vec![
                "High self-weight".to_string(),
                "Weak in tension without reinforcement".to_string(),
                "Slow, wet construction process".to_string(),
            ],
        },
        Material {
            id: "prestressed-concrete".to_string(),
            name: "Prestressed Concrete".to_string(),
            material_type: MaterialType::Concrete,
            span_min: Some(10.0),
            span_max: Some(SPAN_MAX_SENTINEL),
            depth_min: Some(40.0),
            depth_max: Some(70.0),
            description: "Concrete placed under internal compression before loading, \
                          extending its span capacity."
                .to_string(),
            characteristics: vec![
                "Longer span capacity".to_string(),
                "Slimmer member dimensions".to_string(),
                "Controlled cracking".to_string(),
            ],
            suitable_for: vec![
                "Long-span bridges".to_string(),
                "Wide floor plates".to_string(),
                "Girder beams".to_string(),
            ],
            limitations: vec![
                "Requires specialist contractors".to_string(),
                "Higher initial cost".to_string(),
                "Tensioning equipment needed".to_string(),
            ],
        },
        Material {
            id: "wide-flange-steel".to_string(),
            name: "Wide Flange Steel (W-Section)".to_string(),
            material_type: MaterialType::Steel,
            span_min: Some(8.0),
            span_max: Some(15.0),
            depth_min: Some(40.0),
            depth_max: Some(60.0),
            description: "Rolled steel profile with wide flanges, highly efficient in \
                          bending for beams and columns."
                .to_string(),
            characteristics: vec![
                "High strength-to-weight ratio".to_string(),
                "High geometric precision".to_string(),
                "Fast erection".to_string(),
            ],
            suitable_for: vec![
                "Portal frames".to_string(),
                "Mezzanine floor beams".to_string(),
                "Steel building columns".to_string(),
            ],
            limitations: vec![
                "Susceptible to corrosion".to_string(),
                "Loses strength in fire".to_string(),
                "Requires paint or galvanising".to_string(),
            ],
        },
        Material {
            id: "hollow-section-steel".to_string(),
            name: "Hollow Structural Section (HSS)".to_string(),
            material_type: MaterialType::Steel,
            span_min: Some(4.0),
            span_max: Some(10.0),
            depth_min: Some(25.0),
            depth_max: Some(50.0),
            description: "Square or circular hollow steel section, efficient in torsion \
                          and axial compression."
                .to_string(),
            characteristics: vec![
                "Clean aesthetics".to_string(),
                "Excellent torsional resistance".to_string(),
                "Minimal surface area to coat".to_string(),
            ],
            suitable_for: vec![
                "Exposed columns".to_string(),
                "Roof trusses".to_string(),
                "Building facades".to_string(),
            ],
            limitations: vec![
                "Connections more complex than open profiles".to_string(),
                "Higher cost per kilogram".to_string(),
            ],
        },
        Material {
            id: "glulam".to_string(),
            name: "Glued Laminated Timber (Glulam)".to_string(),
            material_type: MaterialType::Timber,
            span_min: Some(6.0),
            span_max: Some(30.0),
            depth_min: Some(40.0),
            depth_max: Some(150.0),
            description: "Engineered timber made by bonding dimension lumber laminations \
                          with waterproof adhesive."
                .to_string(),
            characteristics: vec![
                "Can be curved".to_string(),
                "Very large sections possible".to_string(),
                "Natural appearance".to_string(),
                "More stable than solid timber".to_string(),
            ],
            suitable_for: vec![
                "Wide-span beams".to_string(),
                "Exposed roof structures".to_string(),
                "Pedestrian bridges".to_string(),
            ],
            limitations: vec![
                "Needs weather protection".to_string(),
                "Costs more than sawn lumber".to_string(),
            ],
        },
        Material {
            id: "clt".to_string(),
            name: "Cross Laminated Timber (CLT)".to_string(),
            material_type: MaterialType::Timber,
            span_min: Some(4.0),
            span_max: Some(8.0),
            depth_min: Some(20.0),
            depth_max: Some(27.0),
            description: "Solid timber panel built from boards glued in alternating \
                          perpendicular layers."
                .to_string(),
            characteristics: vec![
                "High dimensional stability".to_string(),
                "Doubles as wall and floor element".to_string(),
                "Good thermal and acoustic insulation".to_string(),
            ],
            suitable_for: vec![
                "Shear walls".to_string(),
                "Prefabricated floors".to_string(),
                "Tall timber buildings".to_string(),
            ],
            limitations: vec![
                "Panel weight requires a crane".to_string(),
                "Connection details must be precise".to_string(),
                "Moisture sensitive during construction".to_string(),
            ],
        },
        Material {
            id: "solid-brick".to_string(),
            name: "Solid Brick Masonry".to_string(),
            material_type: MaterialType::Masonry,
            span_min: Some(2.0),
            span_max: Some(4.0),
            // No reference depth data for masonry: it spans as arches
            // or bearing walls, so the generic ratio applies.
            depth_min: None,
            depth_max: None,
            description: "Conventional fired-clay masonry for bearing walls and short \
                          arched openings."
                .to_string(),
            characteristics: vec![
                "Excellent fire resistance".to_string(),
                "High thermal mass".to_string(),
                "Sound absorbing".to_string(),
            ],
            suitable_for: vec![
                "Infill walls".to_string(),
                "Simple load-bearing walls".to_string(),
                "Boundary walls".to_string(),
            ],
            limitations: vec![
                "Low compressive strength versus concrete".to_string(),
                "Poor seismic performance unreinforced".to_string(),
                "Slow to lay".to_string(),
            ],
        },
    ]
});

/// Ordered collection of material records.
///
/// The catalog owns its materials; queries return references in
/// catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
}

impl MaterialCatalog {
    /// The built-in reference catalog.
    pub fn builtin() -> Self {
        MaterialCatalog {
            materials: BUILTIN_MATERIALS.clone(),
        }
    }

    /// Build a catalog from an explicit material list (e.g., loaded
    /// from an external store). Order is preserved.
    pub fn from_materials(materials: Vec<Material>) -> Self {
        MaterialCatalog { materials }
    }

    /// Parse a catalog from a JSON array of material records.
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let materials: Vec<Material> =
            serde_json::from_str(json).map_err(|e| CalcError::SerializationError {
                reason: e.to_string(),
            })?;
        Ok(MaterialCatalog { materials })
    }

    /// All materials, in catalog order.
    pub fn all(&self) -> &[Material] {
        &self.materials
    }

    /// Materials of a single family, catalog order preserved.
    pub fn by_type(&self, material_type: MaterialType) -> Vec<&Material> {
        self.materials
            .iter()
            .filter(|m| m.material_type == material_type)
            .collect()
    }

    /// Look up a material by id.
    pub fn by_id(&self, id: &str) -> CalcResult<&Material> {
        self.materials
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| CalcError::material_not_found(id))
    }

    /// Number of materials in the catalog.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}
