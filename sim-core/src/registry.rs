use crate::error::SimError;
use crate::field::VectorField;

/// Ordered catalog of vector fields with exactly one active entry.
///
/// Fields are keyed by their string id and kept in catalog order for
/// stable listing. Switching the active field only moves the index;
/// the full simulation reset that must accompany a switch is performed
/// by [`crate::engine::SimulationEngine::set_active_attractor`], which
/// does both inside a single call.
#[derive(Debug)]
pub struct AttractorRegistry {
    fields: Vec<VectorField>,
    active: usize,
}

impl AttractorRegistry {
    /// Builds the standard catalog (Lorenz, Rossler, Aizawa, Thomas)
    /// with Lorenz active.
    pub fn standard() -> Self {
        Self {
            fields: vec![
                VectorField::lorenz(),
                VectorField::rossler(),
                VectorField::aizawa(),
                VectorField::thomas(),
            ],
            active: 0,
        }
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.id == id)
    }

    /// Looks up a field by id.
    pub fn get(&self, id: &str) -> Result<&VectorField, SimError> {
        self.index_of(id)
            .map(|i| &self.fields[i])
            .ok_or_else(|| SimError::UnknownAttractor { id: id.to_string() })
    }

    /// Looks up a field by id for mutation (parameter edits).
    pub fn get_mut(&mut self, id: &str) -> Result<&mut VectorField, SimError> {
        match self.index_of(id) {
            Some(i) => Ok(&mut self.fields[i]),
            None => Err(SimError::UnknownAttractor { id: id.to_string() }),
        }
    }

    pub fn active(&self) -> &VectorField {
        &self.fields[self.active]
    }

    pub fn active_id(&self) -> &'static str {
        self.fields[self.active].id
    }

    /// Makes `id` the active field.
    ///
    /// On an unknown id the registry is left untouched and the
    /// previously active field stays active.
    pub fn set_active(&mut self, id: &str) -> Result<(), SimError> {
        self.active = self
            .index_of(id)
            .ok_or_else(|| SimError::UnknownAttractor { id: id.to_string() })?;
        Ok(())
    }

    /// Catalog entries in listing order.
    pub fn iter(&self) -> impl Iterator<Item = &VectorField> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_lists_all_four_systems_in_order() {
        let reg = AttractorRegistry::standard();
        let ids: Vec<&str> = reg.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec!["lorenz", "rossler", "aizawa", "thomas"]);
        assert_eq!(reg.len(), 4);
    }

    #[test]
    fn lorenz_is_active_by_default() {
        let reg = AttractorRegistry::standard();
        assert_eq!(reg.active_id(), "lorenz");
        assert_eq!(reg.active().scale, 1.0);
    }

    #[test]
    fn get_finds_registered_fields() {
        let reg = AttractorRegistry::standard();
        let field = reg.get("aizawa").unwrap();
        assert_eq!(field.name, "AIZAWA SYSTEM");
        assert_eq!(field.scale, 15.0);
    }

    #[test]
    fn get_rejects_unknown_ids() {
        let reg = AttractorRegistry::standard();
        let err = reg.get("duffing").unwrap_err();
        assert_eq!(
            err,
            SimError::UnknownAttractor {
                id: "duffing".to_string()
            }
        );
    }

    #[test]
    fn set_active_switches_and_reports_new_metadata() {
        let mut reg = AttractorRegistry::standard();
        reg.set_active("thomas").unwrap();
        assert_eq!(reg.active_id(), "thomas");
        assert_eq!(reg.active().scale, 8.0);
    }

    #[test]
    fn set_active_with_unknown_id_keeps_previous_selection() {
        let mut reg = AttractorRegistry::standard();
        reg.set_active("rossler").unwrap();

        let err = reg.set_active("nope").unwrap_err();
        assert_eq!(
            err,
            SimError::UnknownAttractor {
                id: "nope".to_string()
            }
        );
        assert_eq!(reg.active_id(), "rossler");
    }

    #[test]
    fn get_mut_allows_parameter_edits() {
        let mut reg = AttractorRegistry::standard();
        assert!(reg.get_mut("lorenz").unwrap().kind.set_param("rho", 14.0));
        assert_eq!(reg.get("lorenz").unwrap().kind.params()[1], ("rho", 14.0));
    }
}
