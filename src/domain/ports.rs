use crate::utils::error::Result;

/// 房間資料的儲存後端：整份讀取、整份覆寫
pub trait Storage {
    /// 尚未有任何存檔時回傳 `Ok(None)`
    fn read(&self) -> Result<Option<Vec<u8>>>;
    fn write(&self, data: &[u8]) -> Result<()>;
    fn location(&self) -> String;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        (**self).read()
    }

    fn write(&self, data: &[u8]) -> Result<()> {
        (**self).write(data)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}
