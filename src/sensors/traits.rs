use crate::error::Error;
use crate::types::RawCount;

pub trait KnobInput {
    fn read_raw(&mut self) -> Result<RawCount, Error>;
}

impl<T: KnobInput + ?Sized> KnobInput for Box<T> {
    fn read_raw(&mut self) -> Result<RawCount, Error> {
        (**self).read_raw()
    }
}
