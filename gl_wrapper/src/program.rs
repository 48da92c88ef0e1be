use cgmath::Matrix4;
use gl::types::{GLenum, GLuint};
use std::ffi::{c_char, CString};
use thiserror::Error;

pub struct ProgramBuilder {
    vert: CString,
    frag: CString,
}

impl ProgramBuilder {
    pub fn new(vert_src: &str, frag_src: &str) -> Self {
        Self {
            vert: CString::new(vert_src).unwrap(),
            frag: CString::new(frag_src).unwrap(),
        }
    }

    pub fn build(self) -> Result<Program, PBError> {
        let mut success: i32 = 0;

        unsafe {
            let vert = compile_shader(gl::VERTEX_SHADER, &self.vert)?;
            let frag = compile_shader(gl::FRAGMENT_SHADER, &self.frag)?;

            let program = gl::CreateProgram();
            gl::AttachShader(program, vert);
            gl::AttachShader(program, frag);
            gl::LinkProgram(program);

            gl::GetProgramiv(program, gl::LINK_STATUS, (&mut success) as *mut i32);
            if success != 1 {
                let mut buf = [0_u8; 1024];

                gl::GetProgramInfoLog(
                    program,
                    1024,
                    std::ptr::null_mut(),
                    buf.as_mut_ptr() as *mut c_char,
                );

                return Err(PBError::Linking(log_to_string(&buf)));
            }

            gl::DeleteShader(vert);
            gl::DeleteShader(frag);

            Ok(Program { id: program })
        }
    }
}

unsafe fn compile_shader(kind: GLenum, src: &CString) -> Result<GLuint, PBError> {
    let mut success: i32 = 0;

    let shader = gl::CreateShader(kind);

    gl::ShaderSource(
        shader,
        1,
        (&src.as_ptr()) as *const *const c_char,
        std::ptr::null(),
    );

    gl::CompileShader(shader);
    gl::GetShaderiv(shader, gl::COMPILE_STATUS, (&mut success) as *mut i32);
    if success != 1 {
        let mut buf = [0_u8; 1024];

        gl::GetShaderInfoLog(
            shader,
            1024,
            std::ptr::null_mut(),
            buf.as_mut_ptr() as *mut c_char,
        );

        return Err(PBError::Compilation(log_to_string(&buf)));
    }

    Ok(shader)
}

fn log_to_string(buf: &[u8]) -> String {
    let data = if buf.contains(&0) {
        buf.split(|a| *a == 0).next().unwrap()
    } else {
        buf
    };

    CString::new(data).unwrap().to_string_lossy().to_string()
}

#[derive(Debug, Error)]
pub enum PBError {
    #[error("{0}")]
    Compilation(String),
    #[error("{0}")]
    Linking(String),
    #[error("no uniform '{0}' in program")]
    MissingUniform(String),
}

pub struct Program {
    id: GLuint,
}

impl Program {
    pub fn get_id(&self) -> GLuint {
        self.id
    }

    pub fn uniform_location(&self, name: &str) -> Result<i32, PBError> {
        let c_name = CString::new(name).unwrap();

        let location = unsafe { gl::GetUniformLocation(self.id, c_name.as_ptr()) };

        if location == -1 {
            return Err(PBError::MissingUniform(name.to_string()));
        }

        Ok(location)
    }

    pub fn set_mat4(&self, location: i32, value: &Matrix4<f32>) {
        let data: &[f32; 16] = value.as_ref();

        unsafe {
            gl::UseProgram(self.id);
            gl::UniformMatrix4fv(location, 1, gl::FALSE, data.as_ptr());
        }
    }

    pub fn set_int(&self, location: i32, value: i32) {
        unsafe {
            gl::UseProgram(self.id);
            gl::Uniform1i(location, value);
        }
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.id) }
    }
}
