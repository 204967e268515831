use crate::schema::FieldDescriptor;
use crate::schema::FieldType;
use crate::schema::FieldValue;
use crate::schema::FromFieldValue;
use crate::schema::NodeBuildError;
use crate::schema::NodeContext;
use crate::schema::NodeSchema;
use crate::schema::Result;
use indexmap::IndexMap;

/// Field values that have been validated against a [`NodeSchema`].
///
/// Produced by [`BoundFields::bind`]; every declared field is present (in
/// declaration order), holding either the supplied value, a freshly
/// produced default, or [`FieldValue::Null`]. Node types then move typed
/// values out with the `take_*` accessors.
#[derive(Debug)]
pub struct BoundFields {
    schema: &'static NodeSchema,
    values: IndexMap<&'static str, FieldValue>,
}

impl BoundFields {
    /// Validate keyword-style `supplied` fields against `schema`.
    ///
    /// Fails with [`NodeBuildError::UnknownField`] for undeclared names,
    /// [`NodeBuildError::DuplicateField`] for names supplied twice,
    /// [`NodeBuildError::FieldTypeMismatch`] for values of the wrong shape,
    /// and [`NodeBuildError::MissingField`] when a required field is omitted
    /// or explicitly null.
    pub fn bind<'a, I>(schema: &'static NodeSchema, supplied: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, FieldValue)>,
    {
        let mut supplied_values: IndexMap<&'static str, FieldValue> =
            IndexMap::new();
        for (field_name, value) in supplied {
            let Some(descriptor) = schema.field(field_name) else {
                return Err(log_failure(schema, NodeBuildError::UnknownField {
                    type_name: schema.type_name,
                    field_name: field_name.to_string(),
                }));
            };
            if supplied_values.insert(descriptor.name, value).is_some() {
                return Err(log_failure(schema, NodeBuildError::DuplicateField {
                    type_name: schema.type_name,
                    field_name: descriptor.name,
                }));
            }
        }

        let mut values = IndexMap::with_capacity(schema.fields.len());
        for descriptor in schema.fields {
            let value = bind_field(
                schema,
                descriptor,
                supplied_values.swap_remove(descriptor.name),
            )?;
            values.insert(descriptor.name, value);
        }

        Ok(Self { schema, values })
    }

    pub fn schema(&self) -> &'static NodeSchema {
        self.schema
    }

    /// Borrow the bound value of `field_name`, if declared.
    pub fn get(&self, field_name: &str) -> Option<&FieldValue> {
        self.values.get(field_name)
    }

    /// Move the hidden context out, or an empty context if none was given.
    pub fn take_context(&mut self) -> NodeContext {
        match self.take("context") {
            FieldValue::Context(context) => context,
            _ => NodeContext::none(),
        }
    }

    pub fn take_required<T: FromFieldValue>(
        &mut self,
        field_name: &'static str,
    ) -> Result<T> {
        match self.take_optional(field_name)? {
            Some(value) => Ok(value),
            None => Err(log_failure(self.schema, NodeBuildError::MissingField {
                type_name: self.schema.type_name,
                field_name,
            })),
        }
    }

    pub fn take_optional<T: FromFieldValue>(
        &mut self,
        field_name: &'static str,
    ) -> Result<Option<T>> {
        match self.take(field_name) {
            FieldValue::Null => Ok(None),
            value => self.convert(field_name, value).map(Some),
        }
    }

    /// Move a list-typed field out. An absent list is empty.
    pub fn take_list<T: FromFieldValue>(
        &mut self,
        field_name: &'static str,
    ) -> Result<Vec<T>> {
        match self.take(field_name) {
            FieldValue::Null => Ok(vec![]),
            FieldValue::List(items) => items
                .into_iter()
                .map(|item| self.convert(field_name, item))
                .collect(),
            other => Err(self.mismatch(field_name, &other)),
        }
    }

    fn take(&mut self, field_name: &'static str) -> FieldValue {
        self.values
            .get_mut(field_name)
            .map(std::mem::take)
            .unwrap_or_default()
    }

    fn convert<T: FromFieldValue>(
        &self,
        field_name: &'static str,
        value: FieldValue,
    ) -> Result<T> {
        let found = value.describe();
        T::from_field_value(value).ok_or_else(|| {
            log_failure(self.schema, NodeBuildError::FieldTypeMismatch {
                type_name: self.schema.type_name,
                field_name,
                expected: self.expected_type(field_name),
                found,
            })
        })
    }

    fn mismatch(
        &self,
        field_name: &'static str,
        value: &FieldValue,
    ) -> NodeBuildError {
        log_failure(self.schema, NodeBuildError::FieldTypeMismatch {
            type_name: self.schema.type_name,
            field_name,
            expected: self.expected_type(field_name),
            found: value.describe(),
        })
    }

    fn expected_type(&self, field_name: &str) -> FieldType {
        // Node types only ever take fields they declare.
        debug_assert!(self.schema.field(field_name).is_some());
        self.schema
            .field(field_name)
            .map_or(FieldType::Context, |descriptor| descriptor.field_type)
    }
}

fn bind_field(
    schema: &'static NodeSchema,
    descriptor: &'static FieldDescriptor,
    supplied: Option<FieldValue>,
) -> Result<FieldValue> {
    match supplied {
        None | Some(FieldValue::Null) if descriptor.required => {
            Err(log_failure(schema, NodeBuildError::MissingField {
                type_name: schema.type_name,
                field_name: descriptor.name,
            }))
        },

        None | Some(FieldValue::Null) => Ok(
            descriptor.default.map_or(FieldValue::Null, |factory| factory())
        ),

        Some(value) if descriptor.field_type.accepts(&value) => Ok(value),

        Some(value) => {
            Err(log_failure(schema, NodeBuildError::FieldTypeMismatch {
                type_name: schema.type_name,
                field_name: descriptor.name,
                expected: descriptor.field_type,
                found: value.describe(),
            }))
        },
    }
}

fn log_failure(schema: &NodeSchema, error: NodeBuildError) -> NodeBuildError {
    log::trace!(
        "Failed to construct `{}.{}`: {error}",
        schema.namespace,
        schema.type_name,
    );
    error
}
