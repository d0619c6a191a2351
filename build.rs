fn main() {
    let rev = std::process::Command::new("git")
        .args(&["rev-parse", "--short", "HEAD"])
        .output()
        .ok()
        .filter(|r| r.status.success())
        .and_then(|r| String::from_utf8(r.stdout).ok())
        .map(|rev| rev.trim().to_owned())
        .unwrap_or_default();

    println!("cargo:rustc-env=LESSPASS_GIT_HASH={}", rev);
    println!("cargo:rerun-if-changed=.git/HEAD");
}
