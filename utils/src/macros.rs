/// Concatenates supplied slices into one continuous vector.
#[macro_export]
macro_rules! concat_slices {
    ($($slice: expr),+) => {
        [$(&$slice[..]),+].concat()
    }
}

/// Concatenates provided byte slices and hashes result to a point on the curve. Returns as Affine coordinates.
/// Expects a digest type `D` to be in scope.
#[macro_export]
macro_rules! affine_group_element_from_byte_slices {
    ($($arg: expr),+) => {
        $crate::hashing_utils::affine_group_elem_from_try_and_incr::<_, D>(&$crate::concat_slices!($($arg),+))
    };
}

/// Flattened `rayon::join(|| expr1, || rayon::join(|| expr2, || ...))`
#[cfg(feature = "parallel")]
#[macro_export]
macro_rules! join {
    (@ $a: expr) => { $a };
    (@ $a: expr, $b: expr) => {
        rayon::join(|| $a, || $b)
    };
    (@ $a: expr, $b: expr, $($c: expr),+) => {{
        $crate::join!(@ $a, $crate::join!(@ $b, $($c),+))
    }};
    ($($e: expr),+) => {{
        $crate::unnest_tuple!(
            $($e),+
            =>
            $crate::join!(@ $($e),+)
        )
    }}
}

/// `(expr1, expr2, expr3...)`
#[cfg(not(feature = "parallel"))]
#[macro_export]
macro_rules! join {
    ($($e: expr),+) => {
        ($($e),+)
    };
}

/// `(a, (b, c)) => (a, b, c)`
#[macro_export]
macro_rules! unnest_tuple {
    ($a: expr => $v: expr) => {{
        $v
    }};
    ($a: expr, $b: expr => $v: expr) => {{
        let (_a, _b) = $v;

        (_a, _b)
    }};
    ($a: expr, $b: expr, $c: expr => $v: expr) => {{
        let (_a, (_b, _c)) = $v;

        (_a, _b, _c)
    }};
    ($a: expr, $b: expr, $c: expr, $d: expr => $v: expr) => {{
        let (_a, (_b, (_c, _d))) = $v;

        (_a, _b, _c, _d)
    }};
}

/// Adds the term `e($g1, $g2)` to a `PairingProductAccumulator`
#[macro_export]
macro_rules! accumulate_g1_g2 {
    ($accumulator: ident, $g1: expr, $g2: expr) => {
        $accumulator.add_term($g1, $g2)
    };
}

/// Adds the term `e($g1, $g2)` to a `PairingProductAccumulator` when the arguments are given
/// in the order (G2, G1)
#[macro_export]
macro_rules! accumulate_g2_g1 {
    ($accumulator: ident, $g2: expr, $g1: expr) => {
        $accumulator.add_term($g1, $g2)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn unnest_tuple() {
        let a = unnest_tuple!(1 => 1);
        assert_eq!([a], [1]);
        let (a, b) = unnest_tuple!(_a, _b => (1, 2));
        assert_eq!([a, b], [1, 2]);
        let (a, b, c) = unnest_tuple!(_a, _b, _c => (1, (2, 3)));
        assert_eq!([a, b, c], [1, 2, 3]);
        let (a, b, c, d) = unnest_tuple!(_a, _b, _c, _d => (1, (2, (3, 4))));
        assert_eq!([a, b, c, d], [1, 2, 3, 4]);
    }

    #[test]
    fn join() {
        let a = join!(1);
        assert_eq!([a], [1]);
        let (a, b) = join!(1, 2);
        assert_eq!([a, b], [1, 2]);
        let (a, b, c) = join!(1 + 1, 2 * 2, 3);
        assert_eq!([a, b, c], [2, 4, 3]);
        let (a, b, c, d) = join!(1, 2, 3, 4);
        assert_eq!([a, b, c, d], [1, 2, 3, 4]);
    }

    #[test]
    fn concat() {
        let v = concat_slices!(b"label", b" : ", [7u8, 8]);
        assert_eq!(v, b"label : \x07\x08".to_vec());
    }
}
