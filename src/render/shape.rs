//! Top-level shape of a `Serialize` value without serializing its contents.
//!
//! Tags follow the JSON data model serde_json maps values onto. Only the outermost call
//! is inspected (newtypes and `Some` are looked through), so maps with non-string keys
//! and other values serde_json would reject still get a tag.

use serde::ser::{self, Serialize};

type Error = serde_json::Error;

pub(crate) fn shape_tag<T: Serialize + ?Sized>(value: &T) -> Result<&'static str, Error> {
    value.serialize(ShapeOf)
}

struct ShapeOf;

/// Compound serializer that ignores every element and reports a fixed tag.
struct Shape(&'static str);

impl ser::Serializer for ShapeOf {
    type Ok = &'static str;
    type Error = Error;
    type SerializeSeq = Shape;
    type SerializeTuple = Shape;
    type SerializeTupleStruct = Shape;
    type SerializeTupleVariant = Shape;
    type SerializeMap = Shape;
    type SerializeStruct = Shape;
    type SerializeStructVariant = Shape;

    fn serialize_bool(self, _v: bool) -> Result<Self::Ok, Error> {
        Ok("boolean")
    }

    fn serialize_i8(self, _v: i8) -> Result<Self::Ok, Error> {
        Ok("number")
    }

    fn serialize_i16(self, _v: i16) -> Result<Self::Ok, Error> {
        Ok("number")
    }

    fn serialize_i32(self, _v: i32) -> Result<Self::Ok, Error> {
        Ok("number")
    }

    fn serialize_i64(self, _v: i64) -> Result<Self::Ok, Error> {
        Ok("number")
    }

    fn serialize_u8(self, _v: u8) -> Result<Self::Ok, Error> {
        Ok("number")
    }

    fn serialize_u16(self, _v: u16) -> Result<Self::Ok, Error> {
        Ok("number")
    }

    fn serialize_u32(self, _v: u32) -> Result<Self::Ok, Error> {
        Ok("number")
    }

    fn serialize_u64(self, _v: u64) -> Result<Self::Ok, Error> {
        Ok("number")
    }

    fn serialize_f32(self, _v: f32) -> Result<Self::Ok, Error> {
        Ok("number")
    }

    fn serialize_f64(self, _v: f64) -> Result<Self::Ok, Error> {
        Ok("number")
    }

    fn serialize_char(self, _v: char) -> Result<Self::Ok, Error> {
        Ok("string")
    }

    fn serialize_str(self, _v: &str) -> Result<Self::Ok, Error> {
        Ok("string")
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Self::Ok, Error> {
        Ok("array")
    }

    fn serialize_none(self) -> Result<Self::Ok, Error> {
        Ok("null")
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Self::Ok, Error> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Self::Ok, Error> {
        Ok("null")
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Self::Ok, Error> {
        Ok("null")
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Self::Ok, Error> {
        Ok("string")
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Self::Ok, Error> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Self::Ok, Error> {
        Ok("object")
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Shape, Error> {
        Ok(Shape("array"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Shape, Error> {
        Ok(Shape("array"))
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<Shape, Error> {
        Ok(Shape("array"))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Shape, Error> {
        Ok(Shape("object"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Shape, Error> {
        Ok(Shape("object"))
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Shape, Error> {
        Ok(Shape("object"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Shape, Error> {
        Ok(Shape("object"))
    }
}

impl ser::SerializeSeq for Shape {
    type Ok = &'static str;
    type Error = Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, _value: &T) -> Result<(), Error> {
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Error> {
        Ok(self.0)
    }
}

impl ser::SerializeTuple for Shape {
    type Ok = &'static str;
    type Error = Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, _value: &T) -> Result<(), Error> {
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Error> {
        Ok(self.0)
    }
}

impl ser::SerializeTupleStruct for Shape {
    type Ok = &'static str;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, _value: &T) -> Result<(), Error> {
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Error> {
        Ok(self.0)
    }
}

impl ser::SerializeTupleVariant for Shape {
    type Ok = &'static str;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, _value: &T) -> Result<(), Error> {
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Error> {
        Ok(self.0)
    }
}

impl ser::SerializeMap for Shape {
    type Ok = &'static str;
    type Error = Error;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, _key: &T) -> Result<(), Error> {
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, _value: &T) -> Result<(), Error> {
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Error> {
        Ok(self.0)
    }
}

impl ser::SerializeStruct for Shape {
    type Ok = &'static str;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        _key: &'static str,
        _value: &T,
    ) -> Result<(), Error> {
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Error> {
        Ok(self.0)
    }
}

impl ser::SerializeStructVariant for Shape {
    type Ok = &'static str;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        _key: &'static str,
        _value: &T,
    ) -> Result<(), Error> {
        Ok(())
    }

    fn end(self) -> Result<Self::Ok, Error> {
        Ok(self.0)
    }
}
