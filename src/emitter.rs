//! Code emitter for the instantiation fragment
//!
//! Pure templated text emission: given the ordered list of discovered
//! declarations, produce the banner plus one dispatch block per class. The
//! cutoff-method set and the two boundary-test alternatives are fixed at
//! design time, never discovered from input, so identical input text always
//! produces byte-for-byte identical output.
//!
//! The emitted fragment is C++/CUDA consumed by the downstream build; the
//! runtime `dynamic_cast` guards and `switch` dispatch live there, not here.

use crate::scanner::ClassDeclaration;

/// Fixed banner prefixed to all output, marking the file as generated.
pub const BANNER: &str = "\
///////////////////////////////////////////////////////////////////////////////\n\
// This file has been generated by stressgen, do not edit!\n\
///////////////////////////////////////////////////////////////////////////////\n";

/// The closed set of cutoff methods a potential can select at runtime.
///
/// Each member maps to a `PairPotential::<symbol>` enumerator in the emitted
/// `switch`, in the fixed order of [`CutoffMethod::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CutoffMethod {
    NearestStencil,
    ShiftedPotential,
    ShiftedForce,
}

impl CutoffMethod {
    /// All members, in emission order.
    pub const ALL: [CutoffMethod; 3] = [
        CutoffMethod::NearestStencil,
        CutoffMethod::ShiftedPotential,
        CutoffMethod::ShiftedForce,
    ];

    /// The C++ enumerator name, emitted qualified as `PairPotential::<symbol>`.
    pub const fn symbol(self) -> &'static str {
        match self {
            CutoffMethod::NearestStencil => "NS",
            CutoffMethod::ShiftedPotential => "SP",
            CutoffMethod::ShiftedForce => "SF",
        }
    }
}

/// Which periodic-boundary helper a kernel invocation forwards.
///
/// The emitted `if(test_LESB)` condition picks one of the two at the
/// fragment's own runtime; the emitter always writes both alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryTestVariant {
    /// Lees-Edwards shear boundary, taken when `test_LESB` is non-null.
    LeesEdwards,
    /// Rectangular boundary, the fallback.
    Rectangular,
}

impl BoundaryTestVariant {
    /// The boundary-test object forwarded into the kernel, together with
    /// its `->GetDevicePointer()`.
    pub const fn object(self) -> &'static str {
        match self {
            BoundaryTestVariant::LeesEdwards => "test_LESB",
            BoundaryTestVariant::Rectangular => "test_RSB",
        }
    }
}

/// Generate the full fragment: banner, then one block per declaration in
/// scanner order. Pure and deterministic.
pub fn generate(declarations: &[ClassDeclaration]) -> String {
    let mut out = String::from(BANNER);
    for decl in declarations {
        emit_block(&mut out, &decl.name);
    }
    out
}

/// One per-class block: downcast attempt, guard, selector reads, and the
/// cutoff-method switch.
fn emit_block(out: &mut String, name: &str) {
    out.push('\n');
    out.push_str(&format!(
        "  {name}* pot_{name} = dynamic_cast<{name}*>(*potIter);\n"
    ));
    out.push_str(&format!("  if(pot_{name}) {{\n"));
    out.push_str(&format!("    int CM = pot_{name}->GetCutoffMethod();\n"));
    out.push_str(&format!(
        "    const float* d_params_loc = pot_{name}->GetDeviceParamsPtr();\n"
    ));
    out.push_str("    switch(CM) {\n");
    for method in CutoffMethod::ALL {
        emit_case(out, method, name);
    }
    out.push_str("    } // end switch\n");
    out.push_str(&format!("  }} // end if(pot_{name})\n"));
}

/// One `case` label with the boundary-test selection around the kernel
/// invocation.
fn emit_case(out: &mut String, method: CutoffMethod, name: &str) {
    out.push('\n');
    out.push_str(&format!("    case(PairPotential::{}):\n", method.symbol()));
    out.push_str("      if(test_LESB)\n");
    out.push_str(&format!(
        "        {};\n",
        kernel_invocation(method, BoundaryTestVariant::LeesEdwards, name)
    ));
    out.push_str("      else\n");
    out.push_str(&format!(
        "        {};\n",
        kernel_invocation(method, BoundaryTestVariant::Rectangular, name)
    ));
    out.push_str("      break;\n");
}

/// The `mol_stress_tensor` launch. The two variants differ only in the
/// boundary-test object and its device pointer; everything else is forwarded
/// unchanged from the surrounding build context.
fn kernel_invocation(method: CutoffMethod, variant: BoundaryTestVariant, name: &str) -> String {
    let test = variant.object();
    format!(
        "mol_stress_tensor<PairPotential::{symbol}><<<num_mol, threads_per_molecule, nbytes_shared>>>\
         (pot_{name}, M->d_stress, particleData->d_r, M->d_vcm, M->d_cm, M->d_mlist, \
         max_mol_size, num_mol, {test}, {test}->GetDevicePointer(), \
         particleData->GetNumberOfTypes(), d_params_loc)",
        symbol = method.symbol(),
    )
}

// ============================================================================
// Tests
// ============================================================================
