use anyhow::anyhow;
use tasklet_core::store::KeyValueStore;

/// `window.localStorage`. Holds no
/// handle, so every call looks the
/// storage up again.
#[derive(
  Debug, Clone, Copy, Default,
)]
pub struct LocalStore;

fn local_storage()
-> anyhow::Result<web_sys::Storage> {
  web_sys::window()
    .ok_or_else(|| {
      anyhow!("no window object")
    })?
    .local_storage()
    .map_err(|err| {
      anyhow!(
        "local storage unavailable: \
         {err:?}"
      )
    })?
    .ok_or_else(|| {
      anyhow!(
        "local storage disabled"
      )
    })
}

impl KeyValueStore for LocalStore {
  fn load(
    &self,
    key: &str
  ) -> anyhow::Result<Option<String>>
  {
    local_storage()?
      .get_item(key)
      .map_err(|err| {
        anyhow!(
          "failed reading {key}: \
           {err:?}"
        )
      })
  }

  fn save(
    &self,
    key: &str,
    raw: &str
  ) -> anyhow::Result<()> {
    local_storage()?
      .set_item(key, raw)
      .map_err(|err| {
        anyhow!(
          "failed writing {key}: \
           {err:?}"
        )
      })
  }
}
