//! Unreal type names.

use stdbgen_core::BuiltinKind;

use crate::backend::BuiltinMapping;

/// Engine types a generated struct must not shadow.
pub(super) const RESERVED: &[&str] = &[
    "FBox",
    "FBox2D",
    "FColor",
    "FDateTime",
    "FGuid",
    "FInt256",
    "FIntPoint",
    "FIntVector",
    "FKey",
    "FLinearColor",
    "FMatrix",
    "FName",
    "FPlane",
    "FQuat",
    "FRotator",
    "FString",
    "FText",
    "FTimespan",
    "FTransform",
    "FUInt256",
    "FVector",
    "FVector2D",
    "FVector4",
];

pub(super) fn is_reserved(type_name: &str) -> bool {
    RESERVED.binary_search(&type_name).is_ok()
}

/// Blueprint exposes only a handful of integer widths; the rest widen to a
/// reflected type.
pub(super) fn builtin(kind: BuiltinKind) -> BuiltinMapping {
    use BuiltinMapping::*;

    match kind {
        BuiltinKind::Bool => Native("bool"),
        BuiltinKind::U8 => Native("uint8"),
        BuiltinKind::I32 => Native("int32"),
        BuiltinKind::I64 => Native("int64"),
        BuiltinKind::F32 => Native("float"),
        BuiltinKind::F64 => Native("double"),
        BuiltinKind::String => Native("FString"),
        BuiltinKind::I8 => Substitute {
            ty: "int32",
            native: "int8",
        },
        BuiltinKind::I16 => Substitute {
            ty: "int32",
            native: "int16",
        },
        BuiltinKind::U16 => Substitute {
            ty: "int32",
            native: "uint16",
        },
        BuiltinKind::U32 => Substitute {
            ty: "int32",
            native: "uint32",
        },
        BuiltinKind::U64 => Substitute {
            ty: "int64",
            native: "uint64",
        },
        BuiltinKind::I128 => Substitute {
            ty: "FString",
            native: "int128",
        },
        BuiltinKind::U128 => Substitute {
            ty: "FString",
            native: "uint128",
        },
        BuiltinKind::I256 => Helper("Int256"),
        BuiltinKind::U256 => Helper("UInt256"),
        BuiltinKind::Array | BuiltinKind::Map => Unsupported,
    }
}
