//! Runtime view of typed instances.
//!
//! Mapped structs implement [`RdfObject`] through the [`rdf_object!`] macro,
//! which routes accessor names to struct fields. Field types convert to and
//! from the uniform [`FieldValue`] through the [`Field`] trait.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;

use bigdecimal::BigDecimal;
use chrono::{DateTime, FixedOffset};
use num_bigint::BigInt;

use crate::error::{Error, Result};
use crate::literal::{Bytes, LiteralValue, NativeValue, RdfResource, TypedLiteral, Uri, XsdDuration};
use crate::schema::TypeDescriptor;

/// A typed instance that can be encoded to and decoded from a graph.
pub trait RdfObject: fmt::Debug + Send + Sync + 'static {
    fn descriptor(&self) -> &'static TypeDescriptor;
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);
    /// Current value of a property; `None` when unset or empty.
    fn field(&self, accessor: &str) -> Option<FieldValue>;
    fn set_field(&mut self, accessor: &str, value: FieldValue) -> Result<()>;
    /// Statements whose predicate no property declares.
    fn extra(&self) -> &ExtraProperties;
    fn extra_mut(&mut self) -> &mut ExtraProperties;
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    fn clone_box(&self) -> Box<dyn RdfObject>;
    fn eq_dyn(&self, other: &dyn RdfObject) -> bool;
}

impl dyn RdfObject {
    pub fn downcast_ref<T: RdfObject>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast<T: RdfObject>(self: Box<Self>) -> std::result::Result<Box<T>, Box<dyn Any>> {
        self.into_any().downcast::<T>()
    }
}

impl Clone for Box<dyn RdfObject> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl PartialEq for dyn RdfObject {
    fn eq(&self, other: &Self) -> bool {
        self.eq_dyn(other)
    }
}

/// Uniform representation of a property value.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Literal(NativeValue),
    /// Absolute URI of the chosen enumerator.
    Enum(String),
    Object(ObjectValue),
    List(Vec<FieldValue>),
}

impl FieldValue {
    pub(crate) fn shape(&self) -> String {
        match self {
            FieldValue::Literal(v) => v.kind().to_string(),
            FieldValue::Enum(_) => "enumerator".into(),
            FieldValue::Object(_) => "object".into(),
            FieldValue::List(_) => "list".into(),
        }
    }
}

/// An object-valued property: either the nested instance itself, or the id
/// of a node that is described elsewhere (or is still being decoded).
#[derive(Clone, Debug)]
pub enum ObjectValue {
    Embedded(Box<dyn RdfObject>),
    Reference(String),
}

impl ObjectValue {
    pub fn id(&self) -> &str {
        match self {
            ObjectValue::Embedded(obj) => obj.id(),
            ObjectValue::Reference(id) => id,
        }
    }

    pub fn as_object(&self) -> Option<&dyn RdfObject> {
        match self {
            ObjectValue::Embedded(obj) => Some(obj.as_ref()),
            ObjectValue::Reference(_) => None,
        }
    }

    pub fn downcast_ref<T: RdfObject>(&self) -> Option<&T> {
        self.as_object().and_then(|obj| obj.downcast_ref::<T>())
    }
}

impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ObjectValue::Embedded(a), ObjectValue::Embedded(b)) => a.eq_dyn(b.as_ref()),
            (ObjectValue::Reference(a), ObjectValue::Reference(b)) => a == b,
            _ => false,
        }
    }
}

impl<T: RdfObject> From<T> for ObjectValue {
    fn from(obj: T) -> Self {
        ObjectValue::Embedded(Box::new(obj))
    }
}

/// Value of a predicate the schema does not know.
#[derive(Clone, Debug, PartialEq)]
pub enum ExtraValue {
    /// A literal, or a reference to a named node (`LiteralValue::Uri`).
    Literal(LiteralValue),
    /// An anonymous node, kept as its own property map.
    Node(ExtraProperties),
}

/// Unknown predicates keyed by absolute URI, values in document order.
pub type ExtraProperties = BTreeMap<String, Vec<ExtraValue>>;

/// Conversion between a struct field type and [`FieldValue`].
pub trait Field: Sized {
    fn to_field(&self) -> Option<FieldValue>;
    fn from_field(value: FieldValue) -> Result<Self>;
}

#[doc(hidden)]
pub fn mismatch<T>(value: &FieldValue) -> Error {
    Error::UnsupportedLiteralType {
        declared: std::any::type_name::<T>().to_string(),
        found: value.shape(),
    }
}

macro_rules! scalar_field {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Field for $ty {
                fn to_field(&self) -> Option<FieldValue> {
                    Some(FieldValue::Literal(NativeValue::$variant(self.clone())))
                }

                fn from_field(value: FieldValue) -> Result<Self> {
                    match value {
                        FieldValue::Literal(NativeValue::$variant(v)) => Ok(v),
                        other => Err(mismatch::<Self>(&other)),
                    }
                }
            }
        )*
    };
}

scalar_field! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    bool => Bool,
    Uri => Uri,
    String => String,
    DateTime<FixedOffset> => Calendar,
    XsdDuration => Duration,
    BigInt => BigInteger,
    BigDecimal => Decimal,
    Bytes => Bytes,
    TypedLiteral => TypedLiteral,
    RdfResource => Resource,
}

impl Field for ObjectValue {
    fn to_field(&self) -> Option<FieldValue> {
        Some(FieldValue::Object(self.clone()))
    }

    fn from_field(value: FieldValue) -> Result<Self> {
        match value {
            FieldValue::Object(obj) => Ok(obj),
            other => Err(mismatch::<Self>(&other)),
        }
    }
}

impl<T: Field> Field for Option<T> {
    fn to_field(&self) -> Option<FieldValue> {
        self.as_ref().and_then(Field::to_field)
    }

    fn from_field(value: FieldValue) -> Result<Self> {
        T::from_field(value).map(Some)
    }
}

impl<T: Field> Field for Vec<T> {
    fn to_field(&self) -> Option<FieldValue> {
        let items: Vec<FieldValue> = self.iter().filter_map(Field::to_field).collect();
        (!items.is_empty()).then_some(FieldValue::List(items))
    }

    fn from_field(value: FieldValue) -> Result<Self> {
        match value {
            FieldValue::List(items) => items.into_iter().map(T::from_field).collect(),
            single => Ok(vec![T::from_field(single)?]),
        }
    }
}

/// Enumerations whose variants are identified by URI.
pub trait RdfEnum: Sized + Copy + 'static {
    const VARIANTS: &'static [(Self, &'static str)];

    fn uri(&self) -> &'static str;

    fn from_uri(uri: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .find(|(_, u)| *u == uri)
            .map(|(v, _)| *v)
    }
}

/// Declare a URI-identified enumeration and its [`Field`] mapping.
///
/// ```ignore
/// rdf_enum! {
///     pub enum TokenFormat {
///         Jwt => idsc::JWT,
///         Other => idsc::OTHER_TOKEN,
///     }
///     uris = TOKEN_FORMAT_URIS;
/// }
/// ```
#[macro_export]
macro_rules! rdf_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $uri:expr),+ $(,)?
        }
        uris = $uris:ident;
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        /// Enumerator URIs, in declaration order.
        $vis const $uris: &[&str] = &[$($uri),+];

        /// The first declared variant.
        impl Default for $name {
            fn default() -> Self {
                [$($name::$variant),+][0]
            }
        }

        impl $crate::object::RdfEnum for $name {
            const VARIANTS: &'static [(Self, &'static str)] = &[$(($name::$variant, $uri)),+];

            fn uri(&self) -> &'static str {
                match self {
                    $($name::$variant => $uri),+
                }
            }
        }

        impl $crate::object::Field for $name {
            fn to_field(&self) -> Option<$crate::object::FieldValue> {
                Some($crate::object::FieldValue::Enum(
                    $crate::object::RdfEnum::uri(self).to_string(),
                ))
            }

            fn from_field(value: $crate::object::FieldValue) -> $crate::error::Result<Self> {
                match &value {
                    $crate::object::FieldValue::Enum(uri) => {
                        <Self as $crate::object::RdfEnum>::from_uri(uri).ok_or_else(|| {
                            $crate::error::Error::EnumResolution {
                                node: String::new(),
                                predicate: stringify!($name).to_string(),
                                value: uri.clone(),
                            }
                        })
                    }
                    other => Err($crate::object::mismatch::<Self>(other)),
                }
            }
        }
    };
}

/// Implement [`RdfObject`] for a struct with `id: String` and
/// `extra: ExtraProperties` fields, mapping accessor names to fields.
#[macro_export]
macro_rules! rdf_object {
    ($ty:ty, $descriptor:expr, { $($accessor:literal => $field:ident),* $(,)? }) => {
        impl $crate::object::RdfObject for $ty {
            fn descriptor(&self) -> &'static $crate::schema::TypeDescriptor {
                &$descriptor
            }

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }

            fn field(&self, accessor: &str) -> Option<$crate::object::FieldValue> {
                match accessor {
                    $($accessor => $crate::object::Field::to_field(&self.$field),)*
                    _ => None,
                }
            }

            fn set_field(
                &mut self,
                accessor: &str,
                value: $crate::object::FieldValue,
            ) -> $crate::error::Result<()> {
                match accessor {
                    $($accessor => {
                        self.$field = $crate::object::Field::from_field(value)?;
                        Ok(())
                    })*
                    _ => Err($crate::error::Error::UnknownProperty {
                        type_name: <Self as $crate::object::RdfObject>::descriptor(self)
                            .name
                            .to_string(),
                        accessor: accessor.to_string(),
                    }),
                }
            }

            fn extra(&self) -> &$crate::object::ExtraProperties {
                &self.extra
            }

            fn extra_mut(&mut self) -> &mut $crate::object::ExtraProperties {
                &mut self.extra
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn into_any(self: Box<Self>) -> Box<dyn ::std::any::Any> {
                self
            }

            fn clone_box(&self) -> Box<dyn $crate::object::RdfObject> {
                Box::new(self.clone())
            }

            fn eq_dyn(&self, other: &dyn $crate::object::RdfObject) -> bool {
                other
                    .as_any()
                    .downcast_ref::<Self>()
                    .is_some_and(|other| self == other)
            }
        }
    };
}
