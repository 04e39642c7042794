use std::path::Path;

use miette::Result;

pub fn exec(project_dir: &Path) -> Result<()> {
    let props = super::load_existing(project_dir)?;
    print!("{}", props.render());
    Ok(())
}
