//! One-shot system wiring.
//!
//! Hosts keep a registry of sheet implementations per document type. At start
//! up the Repugnant system swaps the host's core sheets for its own. The
//! embedding application calls [`init`] exactly once with its registry.

use crate::sheet::SheetOptions;

/// Registration scope used by this system.
pub const SYSTEM_ID: &str = "repugnant";

/// Registration scope of the host's built-in sheets.
pub const CORE_SCOPE: &str = "core";

/// Document types that own a sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
pub enum DocumentType {
    Actor,
    Item,
}

/// Sheet implementations known to the registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
pub enum SheetKind {
    /// Host's built-in actor sheet.
    CoreActor,
    /// Host's built-in item sheet.
    CoreItem,
    RepugnantActor,
    RepugnantItem,
}

impl SheetKind {
    /// Window options, for the sheets this system defines.
    pub fn options(&self) -> Option<SheetOptions> {
        match self {
            Self::RepugnantActor => Some(SheetOptions::actor()),
            Self::RepugnantItem => Some(SheetOptions::item()),
            Self::CoreActor | Self::CoreItem => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("{sheet} is already registered for {document} in scope '{scope}'")]
    AlreadyRegistered {
        scope: String,
        document: DocumentType,
        sheet: SheetKind,
    },
}

/// Host-side sheet registry.
pub trait SheetRegistry {
    /// Remove every sheet registered for `document` under `scope`.
    fn unregister_sheet(&mut self, scope: &str, document: DocumentType);

    fn register_sheet(
        &mut self,
        scope: &str,
        document: DocumentType,
        sheet: SheetKind,
        make_default: bool,
    ) -> Result<(), RegistryError>;
}

/// Replace the core actor and item sheets with the Repugnant ones.
pub fn init<R: SheetRegistry + ?Sized>(registry: &mut R) -> Result<(), RegistryError> {
    tracing::info!("Repugnant | Initializing system");

    registry.unregister_sheet(CORE_SCOPE, DocumentType::Actor);
    registry.register_sheet(SYSTEM_ID, DocumentType::Actor, SheetKind::RepugnantActor, true)?;

    registry.unregister_sheet(CORE_SCOPE, DocumentType::Item);
    registry.register_sheet(SYSTEM_ID, DocumentType::Item, SheetKind::RepugnantItem, true)?;

    tracing::debug!("Repugnant | Sheets registered");
    Ok(())
}

/// A sheet registration entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registration {
    pub scope: String,
    pub document: DocumentType,
    pub sheet: SheetKind,
    pub default: bool,
}

/// In-memory registry for embedding applications and tooling.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    registrations: Vec<Registration>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry as a fresh host has it: core sheets as defaults.
    pub fn with_core_sheets() -> Self {
        Self {
            registrations: vec![
                Registration {
                    scope: CORE_SCOPE.to_string(),
                    document: DocumentType::Actor,
                    sheet: SheetKind::CoreActor,
                    default: true,
                },
                Registration {
                    scope: CORE_SCOPE.to_string(),
                    document: DocumentType::Item,
                    sheet: SheetKind::CoreItem,
                    default: true,
                },
            ],
        }
    }

    pub fn registrations(&self) -> &[Registration] {
        &self.registrations
    }

    /// The sheet a new document of this type opens with.
    pub fn default_sheet(&self, document: DocumentType) -> Option<&Registration> {
        self.registrations
            .iter()
            .find(|entry| entry.document == document && entry.default)
    }
}

impl SheetRegistry for Registry {
    fn unregister_sheet(&mut self, scope: &str, document: DocumentType) {
        self.registrations
            .retain(|entry| !(entry.scope == scope && entry.document == document));
    }

    fn register_sheet(
        &mut self,
        scope: &str,
        document: DocumentType,
        sheet: SheetKind,
        make_default: bool,
    ) -> Result<(), RegistryError> {
        let duplicate = self.registrations.iter().any(|entry| {
            entry.scope == scope && entry.document == document && entry.sheet == sheet
        });
        if duplicate {
            return Err(RegistryError::AlreadyRegistered {
                scope: scope.to_string(),
                document,
                sheet,
            });
        }

        if make_default {
            for entry in self
                .registrations
                .iter_mut()
                .filter(|entry| entry.document == document)
            {
                entry.default = false;
            }
        }

        self.registrations.push(Registration {
            scope: scope.to_string(),
            document,
            sheet,
            default: make_default,
        });
        Ok(())
    }
}
