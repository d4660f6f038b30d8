use crate::driver::Tle75008Driver;

use super::{Frame, Reg, Tle75008};

/// Chains register reads so each read request also fetches the previous register's value.
///
/// ```ignore
/// let (mut out, mut osm) = (0, 0);
/// chip.reader()
///     .read(Reg::OUT, &mut out).await?
///     .read(Reg::DIAG_OSM, &mut osm).await?
///     .end().await?;
/// ```
///
/// `n` registers take `n + 2` frames instead of `3 * n`.
pub struct Reader<'r, 'a, D: Tle75008Driver> {
    output: Option<&'r mut u8>,
    chip: &'r mut Tle75008<'a, D>,
}

impl<'r, 'a, D> Reader<'r, 'a, D>
where
    D: Tle75008Driver,
    'a: 'r,
{
    pub fn create(chip: &'r mut Tle75008<'a, D>) -> Self {
        Self {
            output: None,
            chip,
        }
    }

    async fn read_internal(&mut self, frame: Frame) -> Result<(), D::Error> {
        let data_read = self.chip.send(frame).await?;
        if let Some(data_out) = self.output.take() {
            *data_out = (data_read & 0x00FF) as u8;
        }
        Ok(())
    }

    pub async fn read(mut self, reg: Reg, output: &'r mut u8) -> Result<Self, D::Error> {
        self.read_internal(Frame::read(reg.addr())).await?;
        self.output = Some(output);
        Ok(self)
    }

    /// Fetches the last requested value and drains the trailing diagnosis.
    pub async fn end(mut self) -> Result<(), D::Error> {
        if self.output.is_none() {
            return Ok(());
        }
        self.read_internal(Frame::FETCH).await?;
        self.read_internal(Frame::FETCH).await
    }
}
