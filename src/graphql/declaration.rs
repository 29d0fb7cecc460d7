//! Schema declaration
//!
//! The SDL file is the contract clients are validated against. The resolver
//! types generate their own SDL; startup refuses to serve unless the two agree
//! on every object type, field, field type and argument.

use std::collections::BTreeMap;
use std::path::Path;

use async_graphql::parser::parse_schema;
use async_graphql::parser::types::{TypeKind, TypeSystemDefinition};
use tracing::debug;

use super::LinkSchema;
use crate::errors::{AppError, Result};

/// One declared field: rendered type (`[Link!]!`) and arguments by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldDeclaration {
    pub ty: String,
    pub arguments: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectDeclaration {
    pub fields: BTreeMap<String, FieldDeclaration>,
}

/// Object types of an SDL document, keyed by type name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDeclaration {
    objects: BTreeMap<String, ObjectDeclaration>,
}

impl SchemaDeclaration {
    /// Read and parse the declaration at `path`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let sdl = std::fs::read_to_string(path).map_err(|e| {
            AppError::schema_read(format!(
                "Failed to read schema declaration {}: {}",
                path.display(),
                e
            ))
        })?;
        debug!("Loaded schema declaration from {}", path.display());
        Self::parse(&sdl)
    }

    /// Parse SDL text. `extend type` blocks merge into the base type;
    /// non-object definitions are ignored.
    pub fn parse(sdl: &str) -> Result<Self> {
        let document = parse_schema(sdl)?;
        let mut objects: BTreeMap<String, ObjectDeclaration> = BTreeMap::new();

        for definition in document.definitions {
            let TypeSystemDefinition::Type(definition) = definition else {
                continue;
            };
            let definition = definition.node;
            let TypeKind::Object(object) = definition.kind else {
                continue;
            };

            let name = definition.name.node.to_string();
            if name.starts_with("__") {
                continue;
            }

            let entry = objects.entry(name).or_default();
            for field in object.fields {
                let field = field.node;
                let arguments = field
                    .arguments
                    .into_iter()
                    .map(|arg| (arg.node.name.node.to_string(), arg.node.ty.node.to_string()))
                    .collect();
                entry.fields.insert(
                    field.name.node.to_string(),
                    FieldDeclaration {
                        ty: field.ty.node.to_string(),
                        arguments,
                    },
                );
            }
        }

        Ok(Self { objects })
    }

    pub fn object(&self, name: &str) -> Option<&ObjectDeclaration> {
        self.objects.get(name)
    }

    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    /// Check that `schema` resolves exactly what this declaration promises
    pub fn verify(&self, schema: &LinkSchema) -> Result<()> {
        let built = Self::parse(&schema.sdl())?;
        let differences = self.diff(&built);

        if differences.is_empty() {
            debug!(
                "Schema declaration verified ({} object types)",
                self.objects.len()
            );
            Ok(())
        } else {
            Err(AppError::schema_mismatch(differences.join("; ")))
        }
    }

    /// Human-readable differences between this declaration and `built`
    pub fn diff(&self, built: &SchemaDeclaration) -> Vec<String> {
        let mut differences = Vec::new();

        for (type_name, declared) in &self.objects {
            let Some(actual) = built.objects.get(type_name) else {
                differences.push(format!("type {} is declared but not resolved", type_name));
                continue;
            };

            for (field_name, declared_field) in &declared.fields {
                let Some(actual_field) = actual.fields.get(field_name) else {
                    differences.push(format!(
                        "{}.{} is declared but not resolved",
                        type_name, field_name
                    ));
                    continue;
                };

                if actual_field.ty != declared_field.ty {
                    differences.push(format!(
                        "{}.{} is declared as {} but resolves to {}",
                        type_name, field_name, declared_field.ty, actual_field.ty
                    ));
                }

                for (arg_name, declared_ty) in &declared_field.arguments {
                    match actual_field.arguments.get(arg_name) {
                        None => differences.push(format!(
                            "{}.{}({}) is declared but not accepted",
                            type_name, field_name, arg_name
                        )),
                        Some(actual_ty) if actual_ty != declared_ty => {
                            differences.push(format!(
                                "{}.{}({}) is declared as {} but accepted as {}",
                                type_name, field_name, arg_name, declared_ty, actual_ty
                            ))
                        }
                        Some(_) => {}
                    }
                }

                for arg_name in actual_field.arguments.keys() {
                    if !declared_field.arguments.contains_key(arg_name) {
                        differences.push(format!(
                            "{}.{}({}) is accepted but not declared",
                            type_name, field_name, arg_name
                        ));
                    }
                }
            }

            for field_name in actual.fields.keys() {
                if !declared.fields.contains_key(field_name) {
                    differences.push(format!(
                        "{}.{} is resolved but not declared",
                        type_name, field_name
                    ));
                }
            }
        }

        for type_name in built.objects.keys() {
            if !self.objects.contains_key(type_name) {
                differences.push(format!("type {} is resolved but not declared", type_name));
            }
        }

        differences
    }
}
