//! Per-title assembly recipes.
//!
//! A recipe maps each of the six areas to a reader/transform chain. The set
//! is closed: every catalogued title binds to exactly one variant, most of
//! them to [`Recipe::Common`].

use crate::area::Area;
use crate::error::BuildError;
use crate::game::{Game, RomSource};
use crate::readers;
use crate::stream::concat;
use crate::transform::{boot, cmc, k2k2, pcm2, pvc, sma};

/// The assembly strategy of one title or board family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Recipe {
    /// The majority of cartridges: program with optional ".ep" patch
    /// overlay, padded M/V areas, pair-interleaved sprites.
    Common,
    /// As common, but the patch ROM is named ".sp2" instead of ".ep1".
    FightFever,
    /// Base program ROMs named like patch ROMs; plain concatenation.
    Kof95a,
    /// The voice area has 2 MiB of erased space in front.
    PBobbleNB,
    /// Prototype with missing M/V1 dumps, replaced by erased images.
    DragonsH,
    /// Prototype split program ROMs, byte-interleaved pairwise in reverse.
    GpilotsP,
    /// Sprite pairs re-interleaved at 2 MiB granularity.
    Kotm2,
    /// Prototype boards: paired program ROMs, sprites in groups of four.
    Kotm2P,
    /// A 2 MiB erased gap between sprite pairs.
    Viewpoin,
    /// CMC42 sprite encryption; fix layer derived from the sprites.
    Cmc42 { xor: u8 },
    /// CMC50 sprite and audio encryption.
    Cmc50 { xor: u8 },
    /// CMC50 plus PCM2 voice scrambling (address XOR generation).
    Pcm2 {
        xor: u8,
        value: usize,
        decrypt_sfix: bool,
    },
    /// SMA program scrambling; sprite/audio schemes per key set.
    Sma(&'static sma::SmaKeys),
    /// PVC program scrambling (mslug5/svc/kof2003 generation).
    Pvc(&'static pvc::PvcKeys),
    /// 2002-generation program block shuffle plus CMC50/PCM2.
    K2k2 {
        xor: u8,
        swap: usize,
        offset: usize,
        blocks: &'static [usize],
    },
    /// Bootleg: word-index scrambled program, bootleg S/C descrambles.
    Kof97Oro,
    /// The early in-house program scramble unique to kof98.
    Kof98,
    /// Bootleg: block-shuffled program with protection patches.
    Lans2004,
    /// Bootleg of matrim: cthd-style sprites, scrambled audio, swapped
    /// voice ROMs.
    MatrimBl,
    /// Bootleg of mslug3 with bootleg S/C descrambles.
    Mslug3B6,
    /// Bootleg of mslug5: original CMC/PCM2 parts, bootleg fix layer.
    Ms5Plus,
    /// Bootleg of garou with bootleg S/C descrambles.
    GarouBl,
    /// Protection not implemented; the build fails.
    Unsupported,
}

impl Recipe {
    /// Assemble one area. Areas are independent; the builder calls this in
    /// the fixed order P, S, M, V1, V2, C.
    pub(crate) fn build_area(
        self,
        game: &Game,
        area: Area,
        source: &mut dyn RomSource,
    ) -> Result<Vec<u8>, BuildError> {
        match self {
            Recipe::Common => common(game, area, source, Some(".ep")),
            Recipe::FightFever => common(game, area, source, Some(".sp")),
            Recipe::Kof95a => match area {
                Area::P => Ok(concat(source.area(game, area)?)),
                _ => common(game, area, source, Some(".ep")),
            },
            Recipe::PBobbleNB => match area {
                Area::V1 => {
                    let mut v = vec![0u8; readers::TWO_MIB];
                    v.extend(common(game, area, source, None)?);
                    Ok(v)
                }
                _ => common(game, area, source, Some(".ep")),
            },
            Recipe::DragonsH => match area {
                Area::P => readers::program_gpilotsp(source.area(game, area)?),
                Area::M => Ok(vec![0xff; readers::ONE_TWENTY_EIGHT_KIB]),
                Area::V1 => Ok(vec![0xff; readers::TWO_MIB]),
                _ => common(game, area, source, Some(".ep")),
            },
            Recipe::GpilotsP => match area {
                Area::P => readers::program_gpilotsp(source.area(game, area)?),
                _ => Recipe::Kotm2P.build_area(game, area, source),
            },
            Recipe::Kotm2 => match area {
                Area::C => readers::sprites_kotm2(source.area(game, area)?),
                _ => common(game, area, source, Some(".ep")),
            },
            Recipe::Kotm2P => match area {
                Area::P => readers::program_kotm2p(source.area(game, area)?),
                Area::C => readers::sprites_kotm2p(source.area(game, area)?),
                _ => common(game, area, source, Some(".ep")),
            },
            Recipe::Viewpoin => match area {
                Area::C => readers::sprites_viewpoin(source.area(game, area)?),
                _ => common(game, area, source, Some(".ep")),
            },
            Recipe::Cmc42 { xor } => match area {
                Area::S => sfix_from_sprites(game, source, false, xor),
                Area::C => decrypted_sprites(game, source, false, xor),
                _ => common(game, area, source, Some(".ep")),
            },
            Recipe::Cmc50 { xor } => match area {
                Area::S => sfix_from_sprites(game, source, true, xor),
                Area::M => audio(game, source),
                Area::C => decrypted_sprites(game, source, true, xor),
                _ => common(game, area, source, Some(".ep")),
            },
            Recipe::Pcm2 {
                xor,
                value,
                decrypt_sfix,
            } => match area {
                Area::S if decrypt_sfix => sfix_from_sprites(game, source, true, xor),
                Area::M => audio(game, source),
                Area::V1 => {
                    let v = common(game, area, source, None)?;
                    Ok(pcm2::pcm2_decrypt(&v, value))
                }
                Area::C => decrypted_sprites(game, source, true, xor),
                _ => common(game, area, source, Some(".ep")),
            },
            Recipe::Sma(keys) => match area {
                Area::P => Ok(sma::sma_program(
                    readers::program_sma(source.area(game, area)?),
                    keys,
                )),
                Area::S => sfix_from_sprites(game, source, keys.cmc50, keys.gfx_xor),
                Area::M if keys.cmc50 => audio(game, source),
                Area::C => decrypted_sprites(game, source, keys.cmc50, keys.gfx_xor),
                _ => common(game, area, source, None),
            },
            Recipe::Pvc(keys) => match area {
                Area::P => Ok(pvc::pvc_program(
                    readers::program_pvc(source.area(game, area)?)?,
                    keys,
                )),
                Area::S => sfix_from_sprites(game, source, true, keys.gfx_xor),
                Area::M => audio(game, source),
                Area::V1 => {
                    let v = common(game, area, source, None)?;
                    Ok(pcm2::pcm2_swap(&v, keys.pcm2_swap))
                }
                Area::C => decrypted_sprites(game, source, true, keys.gfx_xor),
                _ => common(game, area, source, None),
            },
            Recipe::K2k2 {
                xor,
                swap,
                offset,
                blocks,
            } => match area {
                Area::P => Ok(k2k2::k2k2_program(
                    &concat(source.area(game, area)?),
                    offset,
                    blocks,
                )),
                Area::S => sfix_from_sprites(game, source, true, xor),
                Area::M => audio(game, source),
                Area::V1 => {
                    let v = common(game, area, source, None)?;
                    Ok(pcm2::pcm2_swap(&v, swap))
                }
                Area::C => decrypted_sprites(game, source, true, xor),
                _ => common(game, area, source, None),
            },
            Recipe::Kof97Oro => match area {
                Area::P => Ok(boot::kof97oro_program(&concat(source.area(game, area)?))),
                Area::S => Ok(boot::sx_decrypt(&common(game, area, source, None)?, 1)),
                Area::C => Ok(boot::cx_decrypt(&common(game, area, source, None)?)),
                _ => common(game, area, source, Some(".ep")),
            },
            Recipe::Kof98 => match area {
                Area::P => Ok(boot::kof98_program(&concat(source.area(game, area)?))),
                _ => common(game, area, source, Some(".ep")),
            },
            Recipe::Lans2004 => match area {
                Area::P => Ok(boot::lans2004_program(&concat(source.area(game, area)?))),
                Area::S => Ok(boot::sx_decrypt(&common(game, area, source, None)?, 1)),
                Area::V1 => Ok(boot::lans2004_voice(&common(game, area, source, None)?)),
                Area::C => Ok(boot::cx_decrypt(&common(game, area, source, None)?)),
                _ => common(game, area, source, None),
            },
            Recipe::MatrimBl => match area {
                Area::P => Ok(k2k2::k2k2_program(
                    &concat(source.area(game, area)?),
                    0x100000,
                    &k2k2::MATRIM_BLOCKS,
                )),
                Area::M => Ok(boot::matrimbl_audio(&common(game, area, source, None)?)),
                Area::V1 => Ok(boot::matrimbl_voice(&common(game, area, source, None)?)),
                Area::C => Ok(boot::cthd_decrypt(&common(game, area, source, None)?)),
                _ => common(game, area, source, None),
            },
            Recipe::Mslug3B6 => match area {
                Area::S => Ok(boot::sx_decrypt(&common(game, area, source, None)?, 2)),
                Area::C => Ok(boot::cx_decrypt(&common(game, area, source, None)?)),
                _ => common(game, area, source, Some(".ep")),
            },
            Recipe::Ms5Plus => match area {
                Area::S => Ok(boot::sx_decrypt(&common(game, area, source, None)?, 1)),
                Area::M => audio(game, source),
                Area::V1 => {
                    let v = common(game, area, source, None)?;
                    Ok(pcm2::pcm2_swap(&v, 2))
                }
                Area::C => decrypted_sprites(game, source, true, 0x19),
                _ => common(game, area, source, None),
            },
            Recipe::GarouBl => match area {
                Area::S => Ok(boot::sx_decrypt(&common(game, area, source, None)?, 2)),
                Area::C => Ok(boot::cx_decrypt(&common(game, area, source, None)?)),
                _ => common(game, area, source, None),
            },
            Recipe::Unsupported => Err(BuildError::unsupported(game.id)),
        }
    }
}

/// The common per-area routing: P through the program reader, C through the
/// sprite reader, everything else padded.
fn common(
    game: &Game,
    area: Area,
    source: &mut dyn RomSource,
    patch: Option<&str>,
) -> Result<Vec<u8>, BuildError> {
    let spec = &game.areas[area.index()];
    let bufs = source.area(game, area)?;
    match area {
        Area::P => Ok(readers::program(spec, bufs, patch)),
        Area::C => readers::sprites(spec, bufs),
        _ => Ok(readers::padded(spec, bufs)),
    }
}

/// Assemble and decrypt the sprite area of a CMC-protected title.
fn decrypted_sprites(
    game: &Game,
    source: &mut dyn RomSource,
    cmc50: bool,
    xor: u8,
) -> Result<Vec<u8>, BuildError> {
    let spec = &game.areas[Area::C.index()];
    let c = readers::sprites(spec, source.area(game, Area::C)?)?;
    Ok(if cmc50 {
        cmc::cmc50_gfx(&c, xor)
    } else {
        cmc::cmc42_gfx(&c, xor)
    })
}

/// Derive the fix layer of a CMC-protected title from its sprite area. The
/// fix-layer length is the nominal size the catalogue declares for S.
fn sfix_from_sprites(
    game: &Game,
    source: &mut dyn RomSource,
    cmc50: bool,
    xor: u8,
) -> Result<Vec<u8>, BuildError> {
    let c = decrypted_sprites(game, source, cmc50, xor)?;
    Ok(cmc::cmc_sfix(&c, game.areas[Area::S.index()].size as usize))
}

/// Assemble and decrypt a CMC50 audio area.
fn audio(game: &Game, source: &mut dyn RomSource) -> Result<Vec<u8>, BuildError> {
    let m = common(game, Area::M, source, None)?;
    Ok(cmc::cmc50_m1(&m))
}
