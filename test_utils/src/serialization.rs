/// Checks that `$obj` of type `$obj_type` survives a round trip through compressed and uncompressed
/// canonical encoding, JSON and MessagePack. The variant with `$size` also checks the length of the
/// compressed encoding.
#[macro_export]
macro_rules! test_serialization {
    ($obj_type:ty, $obj: expr, $size: expr) => {
        let mut serz = vec![];
        ark_serialize::CanonicalSerialize::serialize_compressed(&$obj, &mut serz).unwrap();
        assert_eq!(serz.len(), $size);
        $crate::test_serialization!($obj_type, $obj);
    };
    ($obj_type:ty, $obj: expr) => {
        let mut serz = vec![];
        ark_serialize::CanonicalSerialize::serialize_compressed(&$obj, &mut serz).unwrap();
        let deserz: $obj_type =
            ark_serialize::CanonicalDeserialize::deserialize_compressed(&serz[..]).unwrap();
        assert_eq!(deserz, $obj);

        let mut serz = vec![];
        ark_serialize::CanonicalSerialize::serialize_uncompressed(&$obj, &mut serz).unwrap();
        let deserz: $obj_type =
            ark_serialize::CanonicalDeserialize::deserialize_uncompressed(&serz[..]).unwrap();
        assert_eq!(deserz, $obj);

        // Test JSON serialization
        let ser = $crate::serde_json::to_string(&$obj).unwrap();
        let deser = $crate::serde_json::from_str::<$obj_type>(&ser).unwrap();
        assert_eq!($obj, deser);

        // Test Message Pack serialization
        let ser = $crate::rmp_serde::to_vec_named(&$obj).unwrap();
        let deser = $crate::rmp_serde::from_slice::<$obj_type>(&ser).unwrap();
        assert_eq!($obj, deser);
    };
}
