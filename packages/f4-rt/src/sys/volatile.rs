#[repr(transparent)]
#[derive(Clone, Copy)]
pub struct VolatilePointer<T>(*mut T);

impl<T: Copy> VolatilePointer<T> {
    /// Construct a new volatile pointer from an address.
    ///
    /// # Safety
    ///
    /// The given address must be valid for reads and writes.
    pub const unsafe fn from_address(address: usize) -> Self {
        assert!(address % align_of::<T>() == 0);
        Self(address as *mut T)
    }

    /// Construct a new volatile pointer to a field of the data at this address.
    ///
    /// # Safety
    ///
    /// The given offset must point to a field of the given type.
    pub(crate) const unsafe fn field<U: Copy>(self, offset: usize) -> VolatilePointer<U> {
        assert!(offset < size_of::<T>());
        let inner = unsafe { self.0.cast::<u8>().add(offset) }.cast::<U>();
        VolatilePointer(inner)
    }

    pub fn read(self) -> T {
        // SAFETY: constructor guarantees that address is valid and aligned
        unsafe { self.0.read_volatile() }
    }

    pub fn write(self, val: T) {
        // SAFETY: constructor guarantees that address is valid and aligned
        unsafe { self.0.write_volatile(val) }
    }
}

impl<T> core::fmt::Debug for VolatilePointer<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_fmt(format_args!("0x{:08x}", self.0.addr()))
    }
}

macro_rules! mmio {
    () => {};
    (
        $(#[$ptr_attr:meta])*
        $ptr_vis:vis const $name:ident: $type:ty = $address:literal $(, size = $size:literal)?; $($rest:tt)*
    ) => {
        $(
            const _: () = {
                assert!(core::mem::size_of::<$type>() == $size);
            };
        )?
        $(#[$ptr_attr])*
        $ptr_vis const $name: $crate::sys::VolatilePointer<$type> = unsafe { $crate::sys::VolatilePointer::<$type>::from_address($address) };
        mmio!($($rest)*);
    };
}
pub(crate) use mmio;

macro_rules! mmstruct {
    (
        $(#[$struct_attr:meta])*
        $struct_vis:vis struct $struct_name:ident {
            $(
                $(#[$field_attr:meta])*
                $field_vis:vis $field:ident: $field_ty:ty,
            )*
        }
    ) => {
        $(#[$struct_attr])*
        $struct_vis struct $struct_name {
            $(
                $(#[$field_attr])*
                $field_vis $field: $field_ty,
            )*
        }

        impl $crate::sys::VolatilePointer<$struct_name> {
            $(
                $(#[$field_attr])*
                $field_vis const fn $field(self) -> $crate::sys::VolatilePointer<$field_ty> {
                    let offset = core::mem::offset_of!($struct_name, $field);
                    // SAFETY: this is definitely the offset of a field which exists on this type.
                    unsafe { self.field(offset) }
                }
            )*
        }
    };
}
pub(crate) use mmstruct;
