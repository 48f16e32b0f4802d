//! End-to-end exercise of `Malloc` installed as the global allocator: every
//! allocation in this binary, the test harness's included, goes through the
//! exhaustion-retry entry points.

use minirt::Malloc;

#[global_allocator]
static GLOBAL: Malloc = Malloc;

#[test]
fn collections_allocate_through_the_entry_points() {
    let mut v = Vec::with_capacity(4);
    for i in 0..1024_u32 {
        v.push(i);
    }
    assert_eq!(v.len(), 1024);
    assert_eq!(v[1023], 1023);

    let s = "runtime".repeat(64);
    assert_eq!(s.len(), 7 * 64);
}

#[test]
fn boxed_values_roundtrip() {
    let boxed = Box::new([0xAB_u8; 512]);
    assert!(boxed.iter().all(|&b| b == 0xAB));
    drop(boxed);

    let slices: Vec<Box<[u8]>> = (0..64_usize)
        .map(|n| vec![n as u8; n].into_boxed_slice())
        .collect();
    for (n, slice) in slices.iter().enumerate() {
        assert_eq!(slice.len(), n);
    }
}

#[test]
fn overaligned_types_get_their_alignment() {
    #[repr(align(128))]
    struct Overaligned([u8; 256]);

    let boxed = Box::new(Overaligned([7; 256]));
    assert_eq!(&*boxed as *const Overaligned as usize % 128, 0);
    assert_eq!(boxed.0[255], 7);
}

#[test]
fn grow_and_shrink_keep_contents() {
    let mut v: Vec<u64> = (0..256).collect();
    v.reserve(10_000);
    assert_eq!(v[255], 255);
    v.shrink_to_fit();
    assert_eq!(v.iter().copied().sum::<u64>(), 255 * 256 / 2);
}
